use super::market::ReferenceTable;
use super::ports::{FeatureScaler, PriceModel};

/// The in-memory form of one uploaded artifact: forecasting model, feature
/// scaler and reference table.
///
/// Constructed atomically by the loader, held for the lifetime of one user
/// session, never mutated after construction. Every accessor borrows, so a
/// failed prediction cannot corrupt the bundle.
pub struct ModelBundle {
    model: Box<dyn PriceModel>,
    scaler: Box<dyn FeatureScaler>,
    reference: ReferenceTable,
}

impl ModelBundle {
    pub fn new(
        model: Box<dyn PriceModel>,
        scaler: Box<dyn FeatureScaler>,
        reference: ReferenceTable,
    ) -> Self {
        Self {
            model,
            scaler,
            reference,
        }
    }

    pub fn model(&self) -> &dyn PriceModel {
        self.model.as_ref()
    }

    pub fn scaler(&self) -> &dyn FeatureScaler {
        self.scaler.as_ref()
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }
}
