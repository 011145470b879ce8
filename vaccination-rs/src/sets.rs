use crate::{
    doses::{Brand, DoseTable, FULL_SCHEME},
    Identity,
};
use paste::paste;
use std::collections::BTreeSet;

/// Identifies one of the derived subpopulations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetKind {
    NotVaccinated,
    BothDoses,
    Only(Brand),
}

impl SetKind {
    /// All derived sets in reporting order.
    pub const ALL: [SetKind; 4] = [
        SetKind::NotVaccinated,
        SetKind::BothDoses,
        SetKind::Only(Brand::Pfizer),
        SetKind::Only(Brand::AstraZeneca),
    ];

    /// Title used in console output.
    pub fn title(&self) -> String {
        match self {
            SetKind::NotVaccinated => "Not vaccinated".to_string(),
            SetKind::BothDoses => "Both doses (complete)".to_string(),
            SetKind::Only(brand) => format!("Only {}", brand),
        }
    }

    /// Name of the CSV file holding the members of this set.
    pub fn file_name(&self) -> String {
        match self {
            SetKind::NotVaccinated => "not_vaccinated.csv".to_string(),
            SetKind::BothDoses => "both_doses.csv".to_string(),
            SetKind::Only(brand) => format!("only_{}.csv", brand.slug()),
        }
    }
}

/// Subpopulations computed by set algebra over the campaign results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedSets {
    /// pfizer ∪ astrazeneca
    pub vaccinated: BTreeSet<Identity>,
    /// population \ (pfizer ∪ astrazeneca)
    pub not_vaccinated: BTreeSet<Identity>,
    /// {c | doses[c] == 2}
    pub both_doses: BTreeSet<Identity>,
    /// pfizer \ astrazeneca
    pub only_pfizer: BTreeSet<Identity>,
    /// astrazeneca \ pfizer
    pub only_astrazeneca: BTreeSet<Identity>,
}

macro_rules! set_counts {
    ($($id:ident),* $(,)?) => {
        paste! {
            impl DerivedSets {
                $(
                    /// Number of members in the corresponding set.
                    pub fn [<n_ $id>](&self) -> usize {
                        self.$id.len()
                    }
                )*
            }
        }
    };
}

set_counts!(vaccinated, not_vaccinated, both_doses, only_pfizer, only_astrazeneca);

impl DerivedSets {
    pub fn derive(
        population: &[Identity],
        pfizer: &BTreeSet<Identity>,
        astrazeneca: &BTreeSet<Identity>,
        doses: &DoseTable,
    ) -> Self {
        let vaccinated: BTreeSet<Identity> = pfizer.union(astrazeneca).cloned().collect();
        DerivedSets {
            not_vaccinated: population
                .iter()
                .filter(|id| !vaccinated.contains(*id))
                .cloned()
                .collect(),
            both_doses: doses
                .iter()
                .filter(|(_, &d)| d == FULL_SCHEME)
                .map(|(id, _)| id.clone())
                .collect(),
            only_pfizer: pfizer.difference(astrazeneca).cloned().collect(),
            only_astrazeneca: astrazeneca.difference(pfizer).cloned().collect(),
            vaccinated,
        }
    }

    /// Return the set of the given kind.
    pub fn get(&self, kind: SetKind) -> &BTreeSet<Identity> {
        match kind {
            SetKind::NotVaccinated => &self.not_vaccinated,
            SetKind::BothDoses => &self.both_doses,
            SetKind::Only(Brand::Pfizer) => &self.only_pfizer,
            SetKind::Only(Brand::AstraZeneca) => &self.only_astrazeneca,
        }
    }
}
