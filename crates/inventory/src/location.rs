use serde::{Deserialize, Serialize};

use invtrack_core::{DomainResult, Entity, LocationId, ensure_not_blank};

/// Kind of site a location represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Warehouse,
    Store,
    DistributionCenter,
    Office,
}

impl LocationType {
    pub fn label(self) -> &'static str {
        match self {
            LocationType::Warehouse => "Warehouse",
            LocationType::Store => "Store",
            LocationType::DistributionCenter => "Distribution Center",
            LocationType::Office => "Office",
        }
    }
}

impl core::fmt::Display for LocationType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage location record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        location_type: LocationType,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location_type,
            address: address.into(),
            contact_info: None,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("location name", &self.name)?;
        ensure_not_blank("location address", &self.address)
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_snake_case_type() {
        let json = r#"{
            "id": "loc-1",
            "name": "North DC",
            "type": "distribution_center",
            "address": "1 Dock Rd",
            "contactInfo": "ops@example.com"
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.location_type, LocationType::DistributionCenter);
        assert_eq!(loc.location_type.label(), "Distribution Center");
        assert_eq!(loc.contact_info.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn unknown_type_is_a_decode_error() {
        let json = r#"{"id":"l","name":"n","type":"garage","address":"a"}"#;
        assert!(serde_json::from_str::<Location>(json).is_err());
    }

    #[test]
    fn validate_requires_name_and_address() {
        let loc = Location::new("l".parse().unwrap(), "Main", LocationType::Store, "");
        assert!(loc.validate().is_err());

        let loc = Location::new("l".parse().unwrap(), "Main", LocationType::Store, "5th Ave");
        assert!(loc.validate().is_ok());
    }
}
