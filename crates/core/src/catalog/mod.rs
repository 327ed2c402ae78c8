//! Read-only country dataset and the sampling helpers the game draws from.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use thiserror::Error;

use crate::model::{Country, CountryId, Difficulty, OPTIONS_PER_QUESTION};

mod data;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog needs at least {min} countries, got {len}")]
    TooFewCountries { len: usize, min: usize },

    #[error("duplicate country id: {0}")]
    DuplicateId(CountryId),

    #[error("country {0} has a blank name or region")]
    BlankField(CountryId),

    #[error("country id cannot be blank")]
    BlankId,

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a custom catalog entry. `flag` defaults to the
/// conventional asset path for the id.
#[derive(Debug, Deserialize)]
struct CountryEntry {
    id: String,
    name: String,
    #[serde(default)]
    flag: Option<String>,
    region: String,
    difficulty: Difficulty,
}

/// Immutable set of countries.
///
/// A `Catalog` always holds at least `OPTIONS_PER_QUESTION` countries with
/// unique ids, so a question can always be built from the full set.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// The built-in dataset.
    #[must_use]
    pub fn builtin() -> Self {
        let countries = data::BUILTIN_COUNTRIES
            .iter()
            .map(|&(id, name, region, difficulty)| {
                Country::new(id, name, Country::flag_path(id), region, difficulty)
            })
            .collect();
        Self { countries }
    }

    /// Build a catalog from arbitrary countries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if there are fewer than `OPTIONS_PER_QUESTION`
    /// countries, an id repeats, or an id/name/region is blank.
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(countries.len());
        for country in &countries {
            if country.id.as_str().trim().is_empty() {
                return Err(CatalogError::BlankId);
            }
            if country.name.trim().is_empty() || country.region.trim().is_empty() {
                return Err(CatalogError::BlankField(country.id.clone()));
            }
            if !seen.insert(&country.id) {
                return Err(CatalogError::DuplicateId(country.id.clone()));
            }
        }

        if countries.len() < OPTIONS_PER_QUESTION {
            return Err(CatalogError::TooFewCountries {
                len: countries.len(),
                min: OPTIONS_PER_QUESTION,
            });
        }

        Ok(Self { countries })
    }

    /// Parse a JSON array of `{ id, name, flag?, region, difficulty }` objects.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or any error from
    /// [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CountryEntry> = serde_json::from_str(json)?;
        let countries = entries
            .into_iter()
            .map(|entry| {
                let flag = entry
                    .flag
                    .unwrap_or_else(|| Country::flag_path(&entry.id));
                Country::new(entry.id, entry.name, flag, entry.region, entry.difficulty)
            })
            .collect();
        Self::new(countries)
    }

    /// Countries in dataset order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// A random selection of the whole catalog, at most `limit` entries.
    pub fn all_countries<R: Rng + ?Sized>(&self, limit: Option<usize>, rng: &mut R) -> Vec<Country> {
        sample(self.countries.iter(), limit, rng)
    }

    /// A random selection of the countries in `regions`, at most `limit`
    /// entries. An empty `regions` slice matches nothing; use
    /// [`Catalog::all_countries`] for the whole catalog.
    pub fn countries_by_regions<R: Rng + ?Sized>(
        &self,
        regions: &[String],
        limit: Option<usize>,
        rng: &mut R,
    ) -> Vec<Country> {
        let matching = self
            .countries
            .iter()
            .filter(|c| regions.iter().any(|r| *r == c.region));
        sample(matching, limit, rng)
    }

    /// A random selection narrowed to one difficulty and, optionally, to
    /// some regions.
    ///
    /// Unlike [`Catalog::countries_by_regions`], an empty
    /// `regions_or_any` slice places no region restriction. `difficulty:
    /// None` keeps every level.
    pub fn countries_by_regions_and_difficulty<R: Rng + ?Sized>(
        &self,
        regions_or_any: &[String],
        difficulty: Option<Difficulty>,
        count: Option<usize>,
        rng: &mut R,
    ) -> Vec<Country> {
        let matching = self.countries.iter().filter(|c| {
            (regions_or_any.is_empty() || regions_or_any.iter().any(|r| *r == c.region))
                && difficulty.is_none_or(|d| c.difficulty == d)
        });
        sample(matching, count, rng)
    }

    /// Sorted, de-duplicated region names present in the catalog.
    #[must_use]
    pub fn available_regions(&self) -> Vec<String> {
        self.countries
            .iter()
            .map(|c| c.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Number of countries per region, ordered by region name.
    #[must_use]
    pub fn region_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for country in &self.countries {
            *counts.entry(country.region.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn country_by_id(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.id.as_str() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Uniform random subset of `candidates` in random order.
///
/// Only the first `limit` slots are shuffled (partial Fisher-Yates), so the
/// cost tracks the draw size rather than the candidate count.
fn sample<'a, R, I>(candidates: I, limit: Option<usize>, rng: &mut R) -> Vec<Country>
where
    R: Rng + ?Sized,
    I: Iterator<Item = &'a Country>,
{
    let mut pool: Vec<&Country> = candidates.collect();
    let take = limit.map_or(pool.len(), |limit| limit.min(pool.len()));
    let (chosen, _) = pool.partial_shuffle(rng, take);
    chosen.iter().map(|c| (*c).clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn regions(names: &[&str]) -> Vec<String> {
        names.iter().map(|r| (*r).to_owned()).collect()
    }

    fn country(id: &str, region: &str) -> Country {
        Country::new(id, id.to_uppercase(), Country::flag_path(id), region, Difficulty::Easy)
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 196);
        let rebuilt = Catalog::new(builtin.countries().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), builtin.len());
    }

    #[test]
    fn available_regions_sorted_and_unique() {
        let regions = Catalog::builtin().available_regions();
        assert_eq!(
            regions,
            [
                "Africa",
                "Asia",
                "Caribbean",
                "Central America",
                "Europe",
                "North America",
                "Oceania",
                "South America",
            ]
        );
    }

    #[test]
    fn region_counts_cover_catalog() {
        let catalog = Catalog::builtin();
        let counts = catalog.region_counts();
        assert_eq!(counts.values().sum::<usize>(), catalog.len());
        assert_eq!(counts.get("North America"), Some(&3));
        assert_eq!(counts.get("Antarctica"), None);
    }

    #[test]
    fn all_countries_respects_limit() {
        let catalog = Catalog::builtin();
        let mut rng = rng();
        let picked = catalog.all_countries(Some(15), &mut rng);
        assert_eq!(picked.len(), 15);
        let unique: HashSet<_> = picked.iter().map(|c| c.id.clone()).collect();
        assert_eq!(unique.len(), 15);

        assert_eq!(catalog.all_countries(None, &mut rng).len(), catalog.len());
        assert_eq!(catalog.all_countries(Some(10_000), &mut rng).len(), catalog.len());
    }

    #[test]
    fn filters_by_region() {
        let catalog = Catalog::builtin();
        let picked = catalog.countries_by_regions(&regions(&["Caribbean"]), None, &mut rng());
        assert_eq!(picked.len(), 13);
        assert!(picked.iter().all(|c| c.region == "Caribbean"));
    }

    #[test]
    fn unknown_or_empty_regions_match_nothing() {
        let catalog = Catalog::builtin();
        assert!(
            catalog
                .countries_by_regions(&regions(&["Antarctica"]), Some(10), &mut rng())
                .is_empty()
        );
        assert!(catalog.countries_by_regions(&[], Some(10), &mut rng()).is_empty());
    }

    #[test]
    fn filters_by_region_and_difficulty() {
        let catalog = Catalog::builtin();
        let picked = catalog.countries_by_regions_and_difficulty(
            &regions(&["Europe"]),
            Some(Difficulty::Easy),
            None,
            &mut rng(),
        );
        assert_eq!(picked.len(), 7);
        assert!(
            picked
                .iter()
                .all(|c| c.region == "Europe" && c.difficulty == Difficulty::Easy)
        );

        let any_region =
            catalog.countries_by_regions_and_difficulty(&[], Some(Difficulty::Hard), Some(5), &mut rng());
        assert_eq!(any_region.len(), 5);
        assert!(any_region.iter().all(|c| c.difficulty == Difficulty::Hard));
    }

    #[test]
    fn empty_region_list_differs_between_filters() {
        let catalog = Catalog::builtin();
        assert!(catalog.countries_by_regions(&[], None, &mut rng()).is_empty());
        assert_eq!(
            catalog
                .countries_by_regions_and_difficulty(&[], None, None, &mut rng())
                .len(),
            catalog.len()
        );
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.country_by_id("jp").unwrap().name, "Japan");
        assert!(catalog.country_by_id("zz").is_none());
    }

    #[test]
    fn rejects_small_catalog() {
        let err = Catalog::new(vec![country("a", "X"), country("b", "X"), country("c", "X")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::TooFewCountries { len: 3, min: 4 }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            country("a", "X"),
            country("b", "X"),
            country("a", "Y"),
            country("d", "X"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn rejects_blank_region() {
        let err = Catalog::new(vec![
            country("a", "X"),
            country("b", " "),
            country("c", "X"),
            country("d", "X"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::BlankField(_)));
    }

    #[test]
    fn parses_json_catalog() {
        let json = r#"[
            {"id": "a", "name": "Alpha", "region": "North", "difficulty": "easy"},
            {"id": "b", "name": "Bravo", "region": "North", "difficulty": "medium"},
            {"id": "c", "name": "Charlie", "region": "South", "difficulty": "hard", "flag": "custom/c.png"},
            {"id": "d", "name": "Delta", "region": "South", "difficulty": "easy"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.country_by_id("a").unwrap().flag, "flags/a.svg");
        assert_eq!(catalog.country_by_id("c").unwrap().flag, "custom/c.png");
        assert_eq!(catalog.available_regions(), ["North", "South"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Catalog::from_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
