use crate::db::{Country, CsvStore, Mineral, ProductionStats, Site};

/// Read-only query layer over the backing store. Every call reads the
/// latest file snapshot; results preserve source order.
#[derive(Debug, Clone)]
pub struct DataService {
    store: CsvStore,
}

impl DataService {
    pub fn new(store: CsvStore) -> Self {
        Self { store }
    }

    // ---- countries ----

    pub fn all_countries(&self) -> Vec<Country> {
        self.store.load_all()
    }

    pub fn country(&self, country_id: u32) -> Option<Country> {
        self.store.find_by_id(country_id)
    }

    /// Exact, case-sensitive name match; first matching row wins.
    pub fn country_by_name(&self, name: &str) -> Option<Country> {
        self.store.find_by(|c: &Country| c.country_name == name)
    }

    // ---- minerals ----

    pub fn all_minerals(&self) -> Vec<Mineral> {
        self.store.load_all()
    }

    pub fn mineral(&self, mineral_id: u32) -> Option<Mineral> {
        self.store.find_by_id(mineral_id)
    }

    // ---- production statistics ----

    pub fn all_production_stats(&self) -> Vec<ProductionStats> {
        self.store.load_all()
    }

    pub fn production_stat(&self, stat_id: u32) -> Option<ProductionStats> {
        self.store.find_by_id(stat_id)
    }

    pub fn production_by_country(&self, country_id: u32) -> Vec<ProductionStats> {
        self.store
            .filter(|s: &ProductionStats| s.country_id == country_id)
    }

    pub fn production_by_mineral(&self, mineral_id: u32) -> Vec<ProductionStats> {
        self.store
            .filter(|s: &ProductionStats| s.mineral_id == mineral_id)
    }

    // ---- sites ----

    pub fn all_sites(&self) -> Vec<Site> {
        self.store.load_all()
    }

    pub fn site(&self, site_id: u32) -> Option<Site> {
        self.store.find_by_id(site_id)
    }

    pub fn sites_by_country(&self, country_id: u32) -> Vec<Site> {
        self.store.filter(|s: &Site| s.country_id == country_id)
    }

    pub fn sites_by_mineral(&self, mineral_id: u32) -> Vec<Site> {
        self.store.filter(|s: &Site| s.mineral_id == mineral_id)
    }

    /// Total tonnage per country, groups in first-seen order. Ties keep
    /// that order; there is no secondary sort.
    pub fn production_by_country_totals(stats: &[ProductionStats]) -> Vec<(u32, u64)> {
        let mut totals: Vec<(u32, u64)> = Vec::new();
        for stat in stats {
            match totals.iter_mut().find(|(id, _)| *id == stat.country_id) {
                Some((_, total)) => *total += stat.production_tonnes,
                None => totals.push((stat.country_id, stat.production_tonnes)),
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::seed_data_dir;

    fn stat(stat_id: u32, country_id: u32, production: u64) -> ProductionStats {
        ProductionStats {
            stat_id,
            year: 2023,
            country_id,
            mineral_id: 1,
            production_tonnes: production,
            export_value_billion_usd: 0.0,
        }
    }

    #[test]
    fn totals_group_in_first_seen_order() {
        let stats = vec![stat(1, 1, 100), stat(2, 2, 50), stat(3, 1, 30)];
        let totals = DataService::production_by_country_totals(&stats);
        assert_eq!(totals, vec![(1, 130), (2, 50)]);
    }

    #[test]
    fn totals_of_nothing_is_nothing() {
        assert!(DataService::production_by_country_totals(&[]).is_empty());
    }

    #[test]
    fn by_country_filters_partition_the_stats() {
        let data = DataService::new(CsvStore::new(seed_data_dir()));
        let all = data.all_production_stats();
        assert!(!all.is_empty());

        let mut collected: Vec<ProductionStats> = Vec::new();
        for country in data.all_countries() {
            collected.extend(data.production_by_country(country.country_id));
        }

        // no row lost or duplicated across the per-country partitions
        assert_eq!(collected.len(), all.len());
        for stat in &all {
            assert_eq!(
                collected.iter().filter(|s| s.stat_id == stat.stat_id).count(),
                1
            );
        }
    }

    #[test]
    fn country_name_lookup_is_case_sensitive() {
        let data = DataService::new(CsvStore::new(seed_data_dir()));
        assert!(data.country_by_name("South Africa").is_some());
        assert!(data.country_by_name("south africa").is_none());
        assert!(data.country_by_name("Atlantis").is_none());
    }

    #[test]
    fn fk_filter_miss_is_empty_not_absent() {
        let data = DataService::new(CsvStore::new(seed_data_dir()));
        assert!(data.production_by_country(999).is_empty());
        assert!(data.sites_by_mineral(999).is_empty());
    }

    #[test]
    fn lookup_round_trips_stored_fields() {
        let data = DataService::new(CsvStore::new(seed_data_dir()));
        for country in &data.all_countries() {
            assert_eq!(data.country(country.country_id).as_ref(), Some(country));
        }
        for mineral in &data.all_minerals() {
            assert_eq!(data.mineral(mineral.mineral_id).as_ref(), Some(mineral));
        }
        for site in &data.all_sites() {
            assert_eq!(data.site(site.site_id).as_ref(), Some(site));
        }
        for stat in &data.all_production_stats() {
            assert_eq!(data.production_stat(stat.stat_id).as_ref(), Some(stat));
        }
    }
}
