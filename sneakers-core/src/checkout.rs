//! Mocked checkout. Nothing leaves the process: a "payment" is a locally
//! generated instruction shown to the user.

use crate::catalog::{ProductId, ProductRecord};
use crate::error::CheckoutError;
use log::info;
use rand::Rng;
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use time::OffsetDateTime;

const VIRTUAL_ACCOUNT_DIGITS: usize = 16;
const VIRTUAL_ACCOUNT_VALIDITY_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PaymentMethod {
    Qris,
    GoPay,
    Ovo,
    Bca,
    Mandiri,
}

impl PaymentMethod {
    pub fn all() -> Vec<PaymentMethod> {
        PaymentMethod::iter().collect()
    }

    /// Stable lowercase identifier, also accepted by `FromStr`.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::GoPay => "GoPay",
            PaymentMethod::Ovo => "OVO",
            PaymentMethod::Bca => "BCA Virtual Account",
            PaymentMethod::Mandiri => "Mandiri Virtual Account",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "Scan & Pay Instantly",
            PaymentMethod::GoPay => "Pay with GoPay Balance",
            PaymentMethod::Ovo => "Pay with OVO Balance",
            PaymentMethod::Bca | PaymentMethod::Mandiri => "Automatic verification",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the payment screen shows for the selected product.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: Option<ProductId>,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub image: Option<String>,
    pub sku: Option<String>,
}

impl OrderSummary {
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl From<&ProductRecord> for OrderSummary {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.display_name().to_string(),
            brand: record.display_brand().to_string(),
            price: record.price(),
            image: record.main_picture_url.clone(),
            sku: record.sku.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInstruction {
    Qris {
        amount: f64,
    },
    VirtualAccount {
        method: PaymentMethod,
        number: String,
        expires_at: OffsetDateTime,
    },
}

impl PaymentInstruction {
    pub fn title(&self) -> &'static str {
        match self {
            PaymentInstruction::Qris { .. } => "QRIS Payment",
            PaymentInstruction::VirtualAccount { .. } => "Virtual Account Number",
        }
    }

    pub fn message(&self) -> String {
        match self {
            PaymentInstruction::Qris { .. } => "Scan this QR code to pay".to_string(),
            PaymentInstruction::VirtualAccount { number, .. } => format!(
                "Your VA Number: {}\nPlease complete payment within {} hours",
                number, VIRTUAL_ACCOUNT_VALIDITY_HOURS
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutSession {
    order: OrderSummary,
    selected: Option<PaymentMethod>,
}

impl CheckoutSession {
    pub fn new(order: OrderSummary) -> Self {
        Self {
            order,
            selected: None,
        }
    }

    pub fn order(&self) -> &OrderSummary {
        &self.order
    }

    pub fn select(&mut self, method: PaymentMethod) {
        self.selected = Some(method);
    }

    pub fn selected(&self) -> Option<PaymentMethod> {
        self.selected
    }

    pub fn can_pay(&self) -> bool {
        self.selected.is_some()
    }

    pub fn confirm(&self) -> Result<PaymentInstruction, CheckoutError> {
        self.confirm_with(&mut rand::rng())
    }

    pub fn confirm_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<PaymentInstruction, CheckoutError> {
        let method = self.selected.ok_or(CheckoutError::NoMethodSelected)?;
        info!(
            "mock payment of {} for '{}' via {}",
            self.order.formatted_price(),
            self.order.name,
            method
        );

        Ok(match method {
            PaymentMethod::Qris => PaymentInstruction::Qris {
                amount: self.order.price,
            },
            _ => PaymentInstruction::VirtualAccount {
                method,
                number: virtual_account_number(rng),
                expires_at: OffsetDateTime::now_utc()
                    + time::Duration::hours(VIRTUAL_ACCOUNT_VALIDITY_HOURS),
            },
        })
    }
}

fn virtual_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..VIRTUAL_ACCOUNT_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
