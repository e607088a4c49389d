use drugharm_core::models::criterion::{CriterionKey, HarmCategory};

use crate::schema::CriteriaSchema;
use crate::scoring::EnabledCriteria;

/// Which criteria the viewer has switched on for one study.
///
/// `All` and `Only(∅)` are different states: the first sums every criterion,
/// the second sums nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CriteriaSelection {
    #[default]
    All,
    Only(EnabledCriteria),
}

impl CriteriaSelection {
    /// Decode the `criteria` query parameter.
    ///
    /// Absent means `All`. Present but empty means nothing is enabled.
    /// Unrecognized keys are dropped.
    pub fn from_query(param: Option<&str>) -> Self {
        let Some(param) = param else {
            return CriteriaSelection::All;
        };

        let keys = param
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.parse::<CriterionKey>() {
                Ok(key) => Some(key),
                Err(err) => {
                    tracing::debug!("ignoring criteria token: {err}");
                    None
                }
            })
            .collect();
        CriteriaSelection::Only(keys)
    }

    /// Decode the `criteria` query parameter against `schema`, so a list naming
    /// every schema key reads back as `All` and re-encodes to no parameter.
    pub fn from_query_for(param: Option<&str>, schema: &CriteriaSchema<'_>) -> Self {
        match Self::from_query(param) {
            CriteriaSelection::Only(keys) => Self::normalized(keys, schema),
            all => all,
        }
    }

    /// Encode for the `criteria` query parameter. `None` means omit the parameter.
    pub fn to_query(&self) -> Option<String> {
        match self {
            CriteriaSelection::All => None,
            CriteriaSelection::Only(keys) => Some(
                keys.iter()
                    .map(CriterionKey::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    /// The filter to hand to the aggregator. `None` means no filtering.
    pub fn enabled(&self) -> Option<&EnabledCriteria> {
        match self {
            CriteriaSelection::All => None,
            CriteriaSelection::Only(keys) => Some(keys),
        }
    }

    pub fn is_enabled(&self, key: CriterionKey) -> bool {
        match self {
            CriteriaSelection::All => true,
            CriteriaSelection::Only(keys) => keys.contains(&key),
        }
    }

    /// How many of `schema`'s criteria are switched on.
    pub fn enabled_count(&self, schema: &CriteriaSchema<'_>) -> usize {
        schema.keys().filter(|key| self.is_enabled(*key)).count()
    }

    /// Same as [`enabled_count`](Self::enabled_count), restricted to one category.
    pub fn enabled_in_category(&self, category: HarmCategory, schema: &CriteriaSchema<'_>) -> usize {
        schema
            .category(category)
            .iter()
            .filter(|c| self.is_enabled(c.key))
            .count()
    }

    pub fn toggle(&mut self, key: CriterionKey, schema: &CriteriaSchema<'_>) {
        let mut keys = self.materialize(schema);
        if !keys.remove(&key) {
            keys.insert(key);
        }
        *self = Self::normalized(keys, schema);
    }

    pub fn select_all(&mut self) {
        *self = CriteriaSelection::All;
    }

    /// Switch everything off. This never collapses back to `All`.
    pub fn clear_all(&mut self) {
        *self = CriteriaSelection::Only(EnabledCriteria::new());
    }

    pub fn select_category(&mut self, category: HarmCategory, schema: &CriteriaSchema<'_>) {
        let mut keys = self.materialize(schema);
        keys.extend(schema.category(category).iter().map(|c| c.key));
        *self = Self::normalized(keys, schema);
    }

    pub fn clear_category(&mut self, category: HarmCategory, schema: &CriteriaSchema<'_>) {
        let mut keys = self.materialize(schema);
        for criterion in schema.category(category) {
            keys.remove(&criterion.key);
        }
        *self = Self::normalized(keys, schema);
    }

    fn materialize(&self, schema: &CriteriaSchema<'_>) -> EnabledCriteria {
        match self {
            CriteriaSelection::All => schema.keys().collect(),
            CriteriaSelection::Only(keys) => keys.clone(),
        }
    }

    fn normalized(keys: EnabledCriteria, schema: &CriteriaSchema<'_>) -> Self {
        if !keys.is_empty() && schema.keys().all(|key| keys.contains(&key)) {
            CriteriaSelection::All
        } else {
            CriteriaSelection::Only(keys)
        }
    }
}
