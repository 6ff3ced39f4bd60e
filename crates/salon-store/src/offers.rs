//! Promotional offers managed from the admin dashboard.
//!
//! Offers are a catalog concern only: they are listed, created, edited and
//! removed, and can be looked up by code. Nothing here applies a discount to a
//! booking's price.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    Active,
    Inactive,
}

/// A discount code with a validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub status: OfferStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub applicable_services: String,
    /// Uses allowed per client.
    #[serde(default)]
    pub usage_limit: u32,
    #[serde(default)]
    pub used_count: u32,
    pub created_at: NaiveDate,
}

impl Offer {
    /// Active, and `date` falls inside the inclusive start/end window.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.status == OfferStatus::Active && self.start_date <= date && date <= self.end_date
    }
}

/// An offer as submitted from the admin form, before it has an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub title: String,
    pub description: String,
    pub code: String,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub status: OfferStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub applicable_services: String,
    pub usage_limit: u32,
}

/// Every offer the salon has defined. Codes are unique, compared
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Offers {
    offers: Vec<Offer>,
}

impl Offers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load stored offers, rejecting duplicate ids, duplicate codes and
    /// invalid windows.
    pub fn from_offers(offers: Vec<Offer>) -> Result<Self> {
        let mut loaded = Self::default();
        for offer in offers {
            check_offer(&offer)?;
            if loaded.get(offer.id).is_some() {
                return Err(StoreError::DuplicateId {
                    entity: "offer",
                    id: offer.id.to_string(),
                });
            }
            loaded.check_code_free(&offer.code, None)?;
            loaded.offers.push(offer);
        }
        Ok(loaded)
    }

    pub fn list(&self) -> &[Offer] {
        &self.offers
    }

    pub fn get(&self, id: u64) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn by_code(&self, code: &str) -> Option<&Offer> {
        let code = code.trim();
        self.offers.iter().find(|o| o.code.eq_ignore_ascii_case(code))
    }

    /// Offers a client could use on `date`.
    pub fn valid_on(&self, date: NaiveDate) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(move |o| o.is_valid_on(date))
    }

    /// Add an offer with the next free id, no uses, created on `today`.
    pub fn create(&mut self, new: NewOffer, today: NaiveDate) -> Result<Offer> {
        let offer = Offer {
            id: self.offers.iter().map(|o| o.id).max().unwrap_or(0) + 1,
            title: new.title,
            description: new.description,
            code: new.code.trim().to_string(),
            discount_percentage: new.discount_percentage,
            discount_amount: new.discount_amount,
            status: new.status,
            start_date: new.start_date,
            end_date: new.end_date,
            applicable_services: new.applicable_services,
            usage_limit: new.usage_limit,
            used_count: 0,
            created_at: today,
        };
        check_offer(&offer)?;
        self.check_code_free(&offer.code, None)?;
        self.offers.push(offer.clone());
        Ok(offer)
    }

    /// Replace the offer with the same id.
    pub fn update(&mut self, offer: Offer) -> Result<Offer> {
        check_offer(&offer)?;
        self.check_code_free(&offer.code, Some(offer.id))?;
        let slot = self
            .offers
            .iter_mut()
            .find(|o| o.id == offer.id)
            .ok_or(StoreError::OfferNotFound(offer.id))?;
        *slot = offer.clone();
        Ok(offer)
    }

    pub fn remove(&mut self, id: u64) -> Result<Offer> {
        let index = self
            .offers
            .iter()
            .position(|o| o.id == id)
            .ok_or(StoreError::OfferNotFound(id))?;
        Ok(self.offers.remove(index))
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    fn check_code_free(&self, code: &str, except: Option<u64>) -> Result<()> {
        match self.by_code(code) {
            Some(existing) if Some(existing.id) != except => Err(StoreError::DuplicateId {
                entity: "offer code",
                id: code.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn check_offer(offer: &Offer) -> Result<()> {
    if offer.title.trim().is_empty() {
        return Err(StoreError::MissingField("title"));
    }
    if offer.code.trim().is_empty() {
        return Err(StoreError::MissingField("code"));
    }
    if offer.end_date < offer.start_date {
        return Err(StoreError::InvalidOffer(format!(
            "end date {} is before start date {}",
            offer.end_date, offer.start_date
        )));
    }
    if !(0.0..=100.0).contains(&offer.discount_percentage) {
        return Err(StoreError::InvalidOffer(format!(
            "discount percentage {} is not between 0 and 100",
            offer.discount_percentage
        )));
    }
    if offer.discount_amount.is_nan() || offer.discount_amount < 0.0 {
        return Err(StoreError::InvalidOffer(format!(
            "discount amount {} is negative",
            offer.discount_amount
        )));
    }
    Ok(())
}
