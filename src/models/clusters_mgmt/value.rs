use crate::models::macros::ocm_struct;

ocm_struct! {
    /// Numeric value paired with a unit, for example a storage quota.
    Value("Value"), ValueBuilder, ValueList, ValueListBuilder {
        /// Name of the unit, for example `B` or `vCPU`.
        unit: string<String> => "unit",
        value: value<f64> => "value",
    }
}
