#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub hit_rate: f64,
    pub hits: u64,
    pub misses: u64,
    pub bytes_served: u64,
    pub swept: u64,
}
