use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    /// Reference to the owning customer; the customer record owns the lifecycle.
    pub customer_id: Uuid,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    /// Latest known weight; refreshed from the scale at every check-in.
    pub weight_kg: Option<f64>,
    pub long_hair: bool,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub customer_id: Uuid,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub weight_kg: Option<f64>,
    pub long_hair: bool,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePetRequest {
    pub customer_id: Option<Uuid>,
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub long_hair: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub weight_kg: Option<f64>,
    pub long_hair: Option<bool>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

impl PetPatch {
    pub fn apply_to(&self, pet: &mut Pet) {
        if let Some(name) = &self.name {
            pet.name = name.clone();
        }
        if let Some(breed) = &self.breed {
            pet.breed = Some(breed.clone());
        }
        if let Some(weight_kg) = self.weight_kg {
            pet.weight_kg = Some(weight_kg);
        }
        if let Some(long_hair) = self.long_hair {
            pet.long_hair = long_hair;
        }
        if let Some(color) = &self.color {
            pet.color = Some(color.clone());
        }
        if let Some(notes) = &self.notes {
            pet.notes = Some(notes.clone());
        }
    }
}
