use super::combining::CombiningRule;
use super::featurizers::{Features, IonFeaturizer};
use crate::core::chemistry::ionic_liquid::IonicLiquid;
use std::fmt;
use tracing::{instrument, trace};

/// Produces one feature mapping per ionic liquid from per-ion features.
///
/// With a combining rule, only features present on both ions survive, each
/// merged into a single value. Without one, every cation feature is emitted as
/// `<name>_cation` and every anion feature as `<name>_anion`.
#[derive(Clone, Copy)]
pub struct IonicLiquidFeaturizer<'a> {
    ion_featurizer: &'a dyn IonFeaturizer,
    combining_rule: Option<CombiningRule>,
}

impl<'a> IonicLiquidFeaturizer<'a> {
    pub fn new(ion_featurizer: &'a dyn IonFeaturizer, combining_rule: Option<CombiningRule>) -> Self {
        Self {
            ion_featurizer,
            combining_rule,
        }
    }

    pub fn combining_rule(&self) -> Option<CombiningRule> {
        self.combining_rule
    }

    #[instrument(skip_all, fields(ionic_liquid = %ionic_liquid.smiles()))]
    pub fn featurize(&self, ionic_liquid: &IonicLiquid) -> Features {
        let cation_features = self.ion_featurizer.featurize(&ionic_liquid.cation);
        let anion_features = self.ion_featurizer.featurize(&ionic_liquid.anion);

        let features = match self.combining_rule {
            Some(rule) => combine(ionic_liquid, rule, cation_features, &anion_features),
            None => concatenate(cation_features, anion_features),
        };
        trace!(count = features.len(), "Featurized ionic liquid.");
        features
    }
}

impl fmt::Debug for IonicLiquidFeaturizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IonicLiquidFeaturizer")
            .field("combining_rule", &self.combining_rule)
            .finish_non_exhaustive()
    }
}

fn combine(
    ionic_liquid: &IonicLiquid,
    rule: CombiningRule,
    cation_features: Features,
    anion_features: &Features,
) -> Features {
    cation_features
        .into_iter()
        .filter_map(|(name, cation_value)| {
            let anion_value = *anion_features.get(&name)?;
            Some((name, rule.apply(ionic_liquid, cation_value, anion_value)))
        })
        .collect()
}

fn concatenate(cation_features: Features, anion_features: Features) -> Features {
    let cation = cation_features
        .into_iter()
        .map(|(name, value)| (format!("{name}_cation"), value));
    let anion = anion_features
        .into_iter()
        .map(|(name, value)| (format!("{name}_anion"), value));
    cation.chain(anion).collect()
}
