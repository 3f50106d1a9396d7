//! Subtotal, VAT, withholding tax and net total
//!
//! All money is `Decimal`. Subtotal, VAT and withholding tax are rounded to
//! two places half-up as they are produced; total and net total are exact
//! sums of those rounded figures, so the printed columns always add up.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::schema::ItemNode;
use crate::{DocumentError, Result};

/// Thai VAT rate (7%)
pub const VAT_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

const DECIMAL_PLACES: u32 = 2;

/// Tax flags for a document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxConfiguration {
    pub has_vat: bool,

    pub has_withholding_tax: bool,

    /// Withholding tax rate in percent (0-100)
    pub withholding_tax_rate: Decimal,
}

impl TaxConfiguration {
    /// VAT rate applied when `has_vat` is set; fixed for the system
    pub fn vat_rate(&self) -> Decimal {
        VAT_RATE
    }

    pub fn with_vat(mut self) -> Self {
        self.has_vat = true;
        self
    }

    pub fn with_withholding_tax(mut self, rate: Decimal) -> Self {
        self.has_withholding_tax = true;
        self.withholding_tax_rate = rate;
        self
    }

    /// Check the withholding rate is a percentage
    pub fn validate(&self) -> Result<()> {
        let rate = self.withholding_tax_rate;
        if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
            return Err(DocumentError::InvalidWithholdingRate(rate));
        }
        Ok(())
    }
}

/// Computed document figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub withholding_tax_amount: Decimal,
    /// Subtotal plus VAT
    pub total: Decimal,
    /// Total minus withholding tax
    pub net_total: Decimal,
}

/// Compute totals over top-level items
///
/// Sub-item amounts are informational and never added. Withholding tax is
/// taken on the subtotal, not on the VAT-inclusive total.
///
/// The withholding rate is only read, and only validated, when
/// `has_withholding_tax` is set.
///
/// # Errors
/// Fails on a negative root amount, a withholding rate outside 0-100, or
/// decimal overflow.
pub fn compute_totals(roots: &[ItemNode], config: &TaxConfiguration) -> Result<DocumentTotals> {
    let mut subtotal = Decimal::ZERO;
    for node in roots {
        let amount = node.item.amount;
        if amount < Decimal::ZERO {
            return Err(DocumentError::NegativeAmount {
                item_id: node.item.id.clone(),
                amount,
            });
        }
        subtotal = subtotal
            .checked_add(amount)
            .ok_or(DocumentError::AmountOverflow("subtotal"))?;
    }
    let subtotal = round_money(subtotal);

    let vat_amount = if config.has_vat {
        subtotal
            .checked_mul(VAT_RATE)
            .map(round_money)
            .ok_or(DocumentError::AmountOverflow("VAT"))?
    } else {
        Decimal::ZERO
    };

    let total = subtotal
        .checked_add(vat_amount)
        .ok_or(DocumentError::AmountOverflow("total"))?;

    let withholding_tax_amount = if config.has_withholding_tax {
        config.validate()?;
        subtotal
            .checked_mul(config.withholding_tax_rate)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .map(round_money)
            .ok_or(DocumentError::AmountOverflow("withholding tax"))?
    } else {
        Decimal::ZERO
    };

    let net_total = total - withholding_tax_amount;

    trace!(
        %subtotal,
        %vat_amount,
        %withholding_tax_amount,
        %net_total,
        "computed document totals"
    );

    Ok(DocumentTotals {
        subtotal,
        vat_amount,
        withholding_tax_amount,
        total,
        net_total,
    })
}

/// Round to satang, half-up
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
