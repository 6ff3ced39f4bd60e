//! Services and staff.
//!
//! Inactive entries stay in the catalog for the admin screens but are unknown
//! as far as booking is concerned.

use serde::{Deserialize, Serialize};

use salon_engine::EngineError;

use crate::error::{Result, StoreError};

fn active() -> bool {
    true
}

/// A bookable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub duration_minutes: u32,
    pub price: f64,
    #[serde(default = "active")]
    pub is_active: bool,
}

/// A team member who takes appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Service>,
    staff: Vec<StaffMember>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and zero-length services.
    pub fn new(services: Vec<Service>, staff: Vec<StaffMember>) -> Result<Self> {
        let mut catalog = Self::default();
        for service in services {
            catalog.add_service(service)?;
        }
        for member in staff {
            catalog.add_staff(member)?;
        }
        Ok(catalog)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn active_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.is_active)
    }

    pub fn active_staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.iter().filter(|m| m.is_active)
    }

    /// Look up a service regardless of whether it is active.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Look up a staff member regardless of whether they are active.
    pub fn staff_member(&self, id: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|m| m.id == id)
    }

    /// An active service, or `UnknownService`.
    pub fn bookable_service(&self, id: &str) -> Result<&Service> {
        self.service(id)
            .filter(|s| s.is_active)
            .ok_or_else(|| StoreError::UnknownService(id.to_string()))
    }

    /// An active staff member, or `UnknownStaff`.
    pub fn bookable_staff(&self, id: &str) -> Result<&StaffMember> {
        self.staff_member(id)
            .filter(|m| m.is_active)
            .ok_or_else(|| StoreError::UnknownStaff(id.to_string()))
    }

    pub fn add_service(&mut self, service: Service) -> Result<()> {
        check_service(&service)?;
        if self.service(&service.id).is_some() {
            return Err(StoreError::DuplicateId {
                entity: "service",
                id: service.id,
            });
        }
        self.services.push(service);
        Ok(())
    }

    /// Replace the service with the same id.
    pub fn update_service(&mut self, service: Service) -> Result<()> {
        check_service(&service)?;
        let slot = self
            .services
            .iter_mut()
            .find(|s| s.id == service.id)
            .ok_or_else(|| StoreError::UnknownService(service.id.clone()))?;
        *slot = service;
        Ok(())
    }

    pub fn remove_service(&mut self, id: &str) -> Result<Service> {
        let index = self
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownService(id.to_string()))?;
        Ok(self.services.remove(index))
    }

    pub fn add_staff(&mut self, member: StaffMember) -> Result<()> {
        if self.staff_member(&member.id).is_some() {
            return Err(StoreError::DuplicateId {
                entity: "staff",
                id: member.id,
            });
        }
        self.staff.push(member);
        Ok(())
    }

    /// Replace the staff member with the same id.
    pub fn update_staff(&mut self, member: StaffMember) -> Result<()> {
        let slot = self
            .staff
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| StoreError::UnknownStaff(member.id.clone()))?;
        *slot = member;
        Ok(())
    }

    pub fn remove_staff(&mut self, id: &str) -> Result<StaffMember> {
        let index = self
            .staff
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::UnknownStaff(id.to_string()))?;
        Ok(self.staff.remove(index))
    }
}

fn check_service(service: &Service) -> Result<()> {
    if service.duration_minutes == 0 {
        return Err(EngineError::InvalidDuration(0).into());
    }
    Ok(())
}
