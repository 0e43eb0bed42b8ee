use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroomerSpecialty {
    Dog,
    Cat,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    #[default]
    Junior,
    Senior,
    Master,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Groomer {
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub phone: String,
    pub specialties: Vec<GroomerSpecialty>,
    pub experience: ExperienceTier,
    /// Inactive groomers are excluded from every availability computation.
    pub is_active: bool,
    pub hire_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGroomer {
    pub name: String,
    pub nickname: Option<String>,
    pub phone: String,
    pub specialties: Vec<GroomerSpecialty>,
    pub experience: ExperienceTier,
    pub is_active: bool,
    pub hire_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroomerRequest {
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub specialties: Vec<GroomerSpecialty>,
    #[serde(default)]
    pub experience: ExperienceTier,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroomerPatch {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub phone: Option<String>,
    pub specialties: Option<Vec<GroomerSpecialty>>,
    pub experience: Option<ExperienceTier>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

impl GroomerPatch {
    pub fn apply_to(&self, groomer: &mut Groomer) {
        if let Some(name) = &self.name {
            groomer.name = name.clone();
        }
        if let Some(nickname) = &self.nickname {
            groomer.nickname = Some(nickname.clone());
        }
        if let Some(phone) = &self.phone {
            groomer.phone = phone.clone();
        }
        if let Some(specialties) = &self.specialties {
            groomer.specialties = specialties.clone();
        }
        if let Some(experience) = self.experience {
            groomer.experience = experience;
        }
        if let Some(is_active) = self.is_active {
            groomer.is_active = is_active;
        }
        if let Some(notes) = &self.notes {
            groomer.notes = Some(notes.clone());
        }
    }
}
