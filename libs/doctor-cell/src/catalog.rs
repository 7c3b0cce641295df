//! Static clinic data: identity, the curated service lists, and the two
//! seeded doctor profiles. The service lists double as the source of truth
//! for mapping a free-text service name to a doctor type.

use serde::Serialize;

use shared_models::{Doctor, DoctorType};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicContact {
    pub phone1: &'static str,
    pub phone2: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicInfo {
    pub name: &'static str,
    pub english_name: &'static str,
    pub full_name: &'static str,
    pub location: &'static str,
    pub contact: ClinicContact,
    pub specializations: &'static [&'static str],
}

pub fn clinic_info() -> ClinicInfo {
    ClinicInfo {
        name: "सत्व",
        english_name: "Satva",
        full_name: "स्किन, डायबिटीज़ थायराइड & एंडोक्राइनोलोजी क्लिनीक, नीमच",
        location: "Neemuch",
        contact: ClinicContact {
            phone1: "9131960802",
            phone2: "9340633407",
        },
        specializations: &["Skin", "Diabetes", "Thyroid", "Endocrinology"],
    }
}

pub const ENDOCRINOLOGY_SERVICES: &[&str] = &[
    "डायबिटीज़, थायराइड",
    "ब्लड प्रेशर",
    "मोटापा",
    "PCOD, अनियमित माहवारी",
    "हार्मोन संबंधित समस्याओं का इलाज",
    "बच्चो में कद ना बढ़ना",
    "MALE HYPOGONADISM",
    "OSTEOPOROSIS",
    "GYNECOMASTIA",
    "PITUTARY TUMOR",
    "ADRENAL DISORDERS",
];

pub const DERMATOLOGY_SERVICES: &[&str] = &[
    "दाद, खाद, खुजली",
    "एलर्जी, एक्जिमा, सोरियसिस",
    "दाग, झाइयां",
    "गंजेपन का इलाज",
    "PRP/GFC",
    "हेयर ट्रांसप्लांट",
    "LASER HAIR REMOVAL",
    "LASER FOR ACNE SCAR & PIGMENTATION",
    "केमिकल पील फॉर ग्लो",
    "हाइडराफ़ेशियल, कार्बन पील",
    "प्री-ब्राइडल ग्लो ट्रीटमेंट",
];

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCatalog {
    pub endocrinology: &'static [&'static str],
    pub dermatology: &'static [&'static str],
}

pub fn service_catalog() -> ServiceCatalog {
    ServiceCatalog {
        endocrinology: ENDOCRINOLOGY_SERVICES,
        dermatology: DERMATOLOGY_SERVICES,
    }
}

/// Map a service name to a doctor type by exact match or substring
/// containment in either direction. Endocrinology is checked before
/// dermatology, so a short string matching both lists resolves to
/// endocrinology. Both the public booking form and the admin edit path go
/// through this one function.
pub fn resolve_doctor_type(service: &str) -> Option<DoctorType> {
    let service = service.trim();
    if service.is_empty() {
        return None;
    }
    let matches = |list: &[&str]| {
        list.iter()
            .any(|catalog| *catalog == service || catalog.contains(service) || service.contains(catalog))
    };
    if matches(ENDOCRINOLOGY_SERVICES) {
        return Some(DoctorType::Endocrinologist);
    }
    if matches(DERMATOLOGY_SERVICES) {
        return Some(DoctorType::Dermatologist);
    }
    None
}

/// The two profiles seeded into an empty store on first access.
pub fn default_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "डॉ. दीक्षा पाटीदार".to_string(),
            english_name: "Dr. Diksha Patidar".to_string(),
            qualifications: "एमबीबीएस, एमडी मेडिसिन (AIIMS नई दिल्ली)".to_string(),
            specialization: "डीआरएनबी एंडोक्राइनोलॉजी (नई दिल्ली)".to_string(),
            title: "हार्मान रोग विशेषज्ञ".to_string(),
            doctor_type: "Endocrinologist".to_string(),
            experience: String::new(),
            image: "/doctors/dr-deeksha.png".to_string(),
        },
        Doctor {
            id: 2,
            name: "डॉ. चेतन कुमार पाटीदार".to_string(),
            english_name: "Dr. Chetan Kumar Patidar".to_string(),
            qualifications: "एमबीबीएस एम.डी. (चर्म रोग, कुष्ठ रोग एवं यौन रोग विशेषज्ञ)".to_string(),
            specialization: "सफदरजंग हॉस्पिटल, नई दिल्ली".to_string(),
            title: String::new(),
            doctor_type: "Dermatologist".to_string(),
            experience: "पूर्व चिकित्सक ईएसआईसी मेडीकल कॉलेज, फरीदाबाद".to_string(),
            image: "/doctors/dr-chetan.png".to_string(),
        },
    ]
}
