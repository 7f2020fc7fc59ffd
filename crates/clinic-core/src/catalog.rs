//! Specialties and practitioners offered by the clinic.
//!
//! The specialty key selects which practitioners can be booked. The doctor
//! profiles shown on the page carry the keys needed to pre-fill the form.

use serde::{Deserialize, Serialize};

/// A bookable practitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Practitioner {
    pub key: &'static str,
    pub label: &'static str,
}

/// A medical specialty (a service card on the page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub key: &'static str,
    /// Title shown on the service card and in the select
    pub title: &'static str,
    pub practitioners: &'static [Practitioner],
}

/// Doctor shown in the team section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorProfile {
    pub name: &'static str,
    /// Role as printed on the card (e.g. "Кардиолог")
    pub role: &'static str,
    pub specialty: &'static str,
    pub practitioner: &'static str,
}

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        key: "cardiology",
        title: "Кардиология",
        practitioners: &[Practitioner {
            key: "ivanov",
            label: "Д-р Иванов (Кардиолог)",
        }],
    },
    Specialty {
        key: "neurology",
        title: "Неврология",
        practitioners: &[Practitioner {
            key: "smirnova",
            label: "Д-р Смирнова (Невролог)",
        }],
    },
    Specialty {
        key: "ophthalmology",
        title: "Офтальмология",
        practitioners: &[Practitioner {
            key: "petrov",
            label: "Д-р Петров (Офтальмолог)",
        }],
    },
    Specialty {
        key: "traumatology",
        title: "Травматология",
        practitioners: &[Practitioner {
            key: "kozlov",
            label: "Д-р Козлов (Травматолог)",
        }],
    },
    Specialty {
        key: "pediatrics",
        title: "Педиатрия",
        practitioners: &[Practitioner {
            key: "volkova",
            label: "Д-р Волкова (Педиатр)",
        }],
    },
    Specialty {
        key: "laboratory",
        title: "Лабораторная диагностика",
        practitioners: &[Practitioner {
            key: "any",
            label: "Любой специалист",
        }],
    },
];

pub const DOCTORS: &[DoctorProfile] = &[
    DoctorProfile {
        name: "Д-р Алексей Иванов",
        role: "Кардиолог",
        specialty: "cardiology",
        practitioner: "ivanov",
    },
    DoctorProfile {
        name: "Д-р Елена Смирнова",
        role: "Невролог",
        specialty: "neurology",
        practitioner: "smirnova",
    },
    DoctorProfile {
        name: "Д-р Михаил Петров",
        role: "Офтальмолог",
        specialty: "ophthalmology",
        practitioner: "petrov",
    },
];

/// Placeholder label of the practitioner select.
pub const PRACTITIONER_PLACEHOLDER: &str = "Выберите врача";

/// Placeholder label of the specialty select.
pub const SPECIALTY_PLACEHOLDER: &str = "Выберите услугу";

/// Look up a specialty by key.
pub fn specialty(key: &str) -> Option<&'static Specialty> {
    SPECIALTIES.iter().find(|s| s.key == key)
}

/// Practitioners bookable for a specialty, or `None` for unknown keys.
pub fn practitioners_for(key: &str) -> Option<&'static [Practitioner]> {
    specialty(key).map(|s| s.practitioners)
}

/// One `<option>` of a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// The practitioner select, whose options depend on the chosen specialty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PractitionerSelect {
    options: Vec<SelectOption>,
    enabled: bool,
    selected: String,
}

impl Default for PractitionerSelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder(PRACTITIONER_PLACEHOLDER)],
            enabled: false,
            selected: String::new(),
        }
    }
}

impl PractitionerSelect {
    /// Replace every option for the given specialty.
    ///
    /// Unknown or empty keys leave only the placeholder and disable the
    /// select. The previous selection is always dropped; a specialty with a
    /// single practitioner gets that practitioner selected.
    pub fn repopulate(&mut self, specialty_key: &str) {
        *self = Self::default();
        if let Some(practitioners) = practitioners_for(specialty_key) {
            self.options.extend(practitioners.iter().map(|p| SelectOption {
                value: p.key.to_string(),
                label: p.label.to_string(),
            }));
            self.enabled = true;
            if let [only] = practitioners {
                self.selected = only.key.to_string();
            }
        }
    }

    /// Select a practitioner. Ignored unless enabled and the key is offered.
    pub fn select(&mut self, key: &str) -> bool {
        let offered = key.is_empty() || self.options.iter().any(|o| o.value == key);
        if !self.enabled || !offered {
            return false;
        }
        self.selected = key.to_string();
        true
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }
}
