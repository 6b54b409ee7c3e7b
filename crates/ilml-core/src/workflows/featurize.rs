use crate::core::chemistry::ionic_liquid::IonicLiquid;
use crate::core::chemistry::toolkit::Toolkit;
use crate::engine::combining::combining_rule;
use crate::engine::config::FeaturizationConfig;
use crate::engine::error::EngineError;
use crate::engine::featurizers::{Features, IonFeaturizer, ion_featurizer};
use crate::engine::ionic_liquid_featurizer::IonicLiquidFeaturizer;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, instrument, warn};

/// One featurized ionic liquid, in canonical notation.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturizedIonicLiquid {
    pub smiles: String,
    pub cation_family: Option<String>,
    pub anion_family: Option<String>,
    pub features: Features,
}

/// An input record left out of the batch, with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeaturizationReport {
    /// Featurized ionic liquids in first-occurrence order of the input.
    pub records: Vec<FeaturizedIonicLiquid>,
    pub skipped: Vec<SkippedRecord>,
}

impl FeaturizationReport {
    /// Feature names present in every record. Empty when there are no records.
    pub fn shared_feature_names(&self) -> BTreeSet<String> {
        let mut records = self.records.iter();
        let Some(first) = records.next() else {
            return BTreeSet::new();
        };
        let mut shared: BTreeSet<String> = first.features.keys().cloned().collect();
        for record in records {
            shared.retain(|name| record.features.contains_key(name));
        }
        shared
    }
}

/// Featurizes a batch of ionic-liquid SMILES with the ion featurizer named in `config`.
pub fn run<S>(
    toolkit: &dyn Toolkit,
    inputs: &[S],
    config: &FeaturizationConfig,
) -> Result<FeaturizationReport, EngineError>
where
    S: AsRef<str>,
{
    let featurizer = ion_featurizer(&config.ion_featurizer)?;
    run_with(toolkit, inputs, featurizer, config)
}

/// Same as [`run`], with a caller-supplied ion featurizer in place of the
/// registry entry named in `config`.
#[instrument(skip_all, name = "featurization_workflow", fields(inputs = inputs.len()))]
pub fn run_with<S>(
    toolkit: &dyn Toolkit,
    inputs: &[S],
    ion_featurizer: &dyn IonFeaturizer,
    config: &FeaturizationConfig,
) -> Result<FeaturizationReport, EngineError>
where
    S: AsRef<str>,
{
    let rule = combining_rule(&config.combining_rule)?;
    let featurizer = IonicLiquidFeaturizer::new(ion_featurizer, rule);

    // === Phase 1: Validation and De-duplication ===
    let (ionic_liquids, skipped) = validate_inputs(toolkit, inputs, config);
    info!(
        accepted = ionic_liquids.len(),
        skipped = skipped.len(),
        "Validated input records."
    );

    // === Phase 2: Classification and Featurization ===
    let records: Vec<FeaturizedIonicLiquid> = ionic_liquids
        .par_iter()
        .map(|ionic_liquid| {
            let (cation_family, anion_family) = ionic_liquid.families(&config.families);
            FeaturizedIonicLiquid {
                smiles: ionic_liquid.smiles(),
                cation_family: cation_family.map(str::to_string),
                anion_family: anion_family.map(str::to_string),
                features: featurizer.featurize(ionic_liquid),
            }
        })
        .collect();

    let report = FeaturizationReport { records, skipped };
    info!(
        records = report.records.len(),
        shared_features = report.shared_feature_names().len(),
        combining_rule = %config.combining_rule,
        "Featurization complete."
    );
    Ok(report)
}

fn validate_inputs<S: AsRef<str>>(
    toolkit: &dyn Toolkit,
    inputs: &[S],
    config: &FeaturizationConfig,
) -> (Vec<IonicLiquid>, Vec<SkippedRecord>) {
    let mut seen = HashSet::new();
    let mut ionic_liquids = Vec::new();
    let mut skipped = Vec::new();

    for input in inputs {
        let input: &str = input.as_ref();
        let reject = |reason: String| {
            warn!(input, %reason, "Skipping record.");
            SkippedRecord {
                input: input.to_string(),
                reason,
            }
        };

        let ionic_liquid = match IonicLiquid::from_smiles(toolkit, input.trim()) {
            Ok(ionic_liquid) => ionic_liquid,
            Err(e) => {
                skipped.push(reject(e.to_string()));
                continue;
            }
        };

        if let Some(allowed) = &config.allowed_elements {
            let disallowed = ionic_liquid.disallowed_elements(allowed);
            if !disallowed.is_empty() {
                let symbols: Vec<_> = disallowed.into_iter().collect();
                skipped.push(reject(format!(
                    "contains disallowed elements: {}",
                    symbols.join(", ")
                )));
                continue;
            }
        }

        if seen.insert(ionic_liquid.smiles()) {
            ionic_liquids.push(ionic_liquid);
        } else {
            debug!(input, "Dropping duplicate ionic liquid.");
        }
    }
    (ionic_liquids, skipped)
}
