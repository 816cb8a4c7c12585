use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::PathBuf,
};

use fxhash::{FxHashMap, FxHasher64};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::route_provider::RouteProvider;

/// Stores resolved road distances, keyed by provider and endpoints.
pub trait RouteCache: Send + Sync {
    fn cache<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
        distance_km: f64,
    ) -> Result<(), anyhow::Error>
    where
        P: Into<geo_types::Point>;

    fn get_cached<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
    ) -> Result<Option<f64>, anyhow::Error>
    where
        P: Into<geo_types::Point>;
}

#[derive(Serialize, Deserialize)]
struct CachedRoute {
    distance_km: f64,
}

fn hash_point<H: Hasher>(point: geo_types::Point, hasher: &mut H) {
    hasher.write_u64(point.x().to_bits());
    hasher.write_u64(point.y().to_bits());
}

fn route_key<P>(provider: &RouteProvider, from: P, to: P) -> u64
where
    P: Into<geo_types::Point>,
{
    let mut hasher = FxHasher64::default();

    hash_point(from.into(), &mut hasher);
    hash_point(to.into(), &mut hasher);
    provider.hash(&mut hasher);

    hasher.finish()
}

pub struct NoCache;

impl RouteCache for NoCache {
    fn cache<P>(&self, _: &RouteProvider, _: P, _: P, _: f64) -> Result<(), anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        Ok(())
    }

    fn get_cached<P>(&self, _: &RouteProvider, _: P, _: P) -> Result<Option<f64>, anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        Ok(None)
    }
}

#[derive(Default)]
pub struct MemoryCache {
    routes: RwLock<FxHashMap<u64, f64>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

impl RouteCache for MemoryCache {
    fn cache<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
        distance_km: f64,
    ) -> Result<(), anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let key = route_key(provider, from, to);
        self.routes.write().insert(key, distance_km);
        Ok(())
    }

    fn get_cached<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
    ) -> Result<Option<f64>, anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let key = route_key(provider, from, to);
        Ok(self.routes.read().get(&key).copied())
    }
}

/// One JSON file per route in a cache folder.
pub struct FileCache {
    folder: PathBuf,
}

impl FileCache {
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let folder = folder.into();

        if !folder.is_dir() {
            return Err(anyhow::anyhow!(
                "Path {} is not a directory",
                folder.display()
            ));
        }

        Ok(FileCache { folder })
    }

    fn file_path<P>(&self, provider: &RouteProvider, from: P, to: P) -> PathBuf
    where
        P: Into<geo_types::Point>,
    {
        let key = route_key(provider, from, to);
        self.folder.join(format!("{key:016x}.json"))
    }
}

impl RouteCache for FileCache {
    fn cache<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
        distance_km: f64,
    ) -> Result<(), anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let file = std::fs::File::create(self.file_path(provider, from, to))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &CachedRoute { distance_km })?;
        writer.flush()?;

        Ok(())
    }

    fn get_cached<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
    ) -> Result<Option<f64>, anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let file_path = self.file_path(provider, from, to);

        if !file_path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(file_path)?;
        let cached: CachedRoute = serde_json::from_reader(file)?;

        Ok(Some(cached.distance_km))
    }
}

/// Memory first, then the optional file cache. File hits are promoted to
/// memory.
#[derive(Default)]
pub struct TieredCache {
    memory: MemoryCache,
    file: Option<FileCache>,
}

impl TieredCache {
    pub fn new(file: Option<FileCache>) -> Self {
        TieredCache {
            memory: MemoryCache::default(),
            file,
        }
    }
}

impl RouteCache for TieredCache {
    fn cache<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
        distance_km: f64,
    ) -> Result<(), anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let (from, to): (geo_types::Point, geo_types::Point) = (from.into(), to.into());

        self.memory.cache(provider, from, to, distance_km)?;
        if let Some(file) = &self.file {
            file.cache(provider, from, to, distance_km)?;
        }

        Ok(())
    }

    fn get_cached<P>(
        &self,
        provider: &RouteProvider,
        from: P,
        to: P,
    ) -> Result<Option<f64>, anyhow::Error>
    where
        P: Into<geo_types::Point>,
    {
        let (from, to): (geo_types::Point, geo_types::Point) = (from.into(), to.into());

        if let Some(distance_km) = self.memory.get_cached(provider, from, to)? {
            return Ok(Some(distance_km));
        }

        let Some(file) = &self.file else {
            return Ok(None);
        };

        let cached = file.get_cached(provider, from, to)?;
        if let Some(distance_km) = cached {
            self.memory.cache(provider, from, to, distance_km)?;
        }

        Ok(cached)
    }
}
