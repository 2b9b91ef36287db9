// Binds the monitoring facade to a toy engine and prints the pool snapshots.
use std::sync::Arc;

use mapsight::api::{
    CANONICAL_STORE, DataSource, EngineContext, EngineHandle, PoolCounters, PoolReporter,
    PoolStatsSource, TransactionModule, snapshots_json,
};

#[derive(Debug)]
struct DemoPool {
    name: &'static str,
    available_memory: u64,
    used_memory: u64,
    window_count: u64,
    window_size: u64,
    hit_count: u64,
    miss_count: u64,
    oom_count: u64,
}

impl PoolCounters for DemoPool {
    fn name(&self) -> &str {
        self.name
    }

    fn available_memory(&self) -> u64 {
        self.available_memory
    }

    fn used_memory(&self) -> u64 {
        self.used_memory
    }

    fn window_count(&self) -> u64 {
        self.window_count
    }

    fn window_size(&self) -> u64 {
        self.window_size
    }

    fn hit_count(&self) -> u64 {
        self.hit_count
    }

    fn miss_count(&self) -> u64 {
        self.miss_count
    }

    fn oom_count(&self) -> u64 {
        self.oom_count
    }
}

#[derive(Debug)]
struct DemoStatsSource {
    pools: Vec<Arc<DemoPool>>,
}

impl PoolStatsSource for DemoStatsSource {
    fn window_pool_stats(&self) -> Vec<Arc<dyn PoolCounters>> {
        self.pools
            .iter()
            .map(|pool| Arc::clone(pool) as Arc<dyn PoolCounters>)
            .collect()
    }
}

struct DemoDataSource {
    stats: Arc<DemoStatsSource>,
}

impl DataSource for DemoDataSource {
    fn name(&self) -> &str {
        CANONICAL_STORE
    }

    fn pool_stats(&self) -> Option<EngineHandle> {
        Some(Arc::clone(&self.stats) as EngineHandle)
    }
}

struct DemoEngine {
    canonical: Arc<DemoDataSource>,
}

impl EngineContext for DemoEngine {
    fn data_sources(&self) -> Vec<Arc<dyn DataSource>> {
        vec![Arc::clone(&self.canonical) as Arc<dyn DataSource>]
    }

    fn transaction_module(&self) -> Option<Arc<dyn TransactionModule>> {
        None
    }
}

fn main() {
    let stats = Arc::new(DemoStatsSource {
        pools: vec![
            Arc::new(DemoPool {
                name: "neostore.nodestore.db",
                available_memory: 1024,
                used_memory: 2048,
                window_count: 2,
                window_size: 1024,
                hit_count: 500,
                miss_count: 10,
                oom_count: 0,
            }),
            Arc::new(DemoPool {
                name: "neostore.relationshipstore.db",
                available_memory: 8192,
                used_memory: 4096,
                window_count: 1,
                window_size: 4096,
                hit_count: 120,
                miss_count: 4,
                oom_count: 1,
            }),
        ],
    });
    let engine = Arc::new(DemoEngine {
        canonical: Arc::new(DemoDataSource { stats }),
    });

    let reporter = PoolReporter::standard(engine).expect("bind facade");
    let snapshots = reporter.pools().expect("query pools");

    let rendered =
        serde_json::to_string_pretty(&snapshots_json(&snapshots)).expect("render JSON");
    println!("{rendered}");
}
