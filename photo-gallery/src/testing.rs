//! In-memory capabilities for unit tests

use crate::camera::Camera;
use crate::clock::Clock;
use crate::error::{PhotoGalleryError, Result};
use crate::fetch::ResourceFetcher;
use crate::flash::FlashControl;
use crate::models::{Blob, CaptureOptions, CapturedPhoto, Directory, FileReadResult, FileWriteResult};
use crate::preferences::{KeyValueStore, MemoryPreferences};
use crate::storage::{base64_payload, FileStore};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns `start`, `start + 1`, ... on consecutive calls
pub struct StepClock {
    next: AtomicI64,
}

impl StepClock {
    pub fn new(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

/// Hands out queued captures, fails like a cancelled prompt when empty
#[derive(Default)]
pub struct FakeCamera {
    queue: Mutex<VecDeque<CapturedPhoto>>,
    requests: Mutex<Vec<CaptureOptions>>,
}

impl FakeCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, photo: CapturedPhoto) {
        self.queue.lock().unwrap().push_back(photo);
    }

    pub fn requests(&self) -> Vec<CaptureOptions> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Camera for FakeCamera {
    async fn capture(&self, options: &CaptureOptions) -> Result<CapturedPhoto> {
        self.requests.lock().unwrap().push(options.clone());
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PhotoGalleryError::Camera("User cancelled photos app".to_string()))
    }
}

/// Files keyed by URI; `Directory` scoped paths live under `file:///<dir>/`
#[derive(Default)]
pub struct MemoryFileStore {
    files: Mutex<HashMap<String, String>>,
    next_uri: Mutex<Option<String>>,
    deleted: Mutex<Vec<String>>,
    reads: AtomicUsize,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_key(path: &str) -> String {
        Self::key(path, Some(Directory::Data))
    }

    fn key(path: &str, directory: Option<Directory>) -> String {
        match directory {
            Some(dir) => format!("file:///{}/{}", dir.dir_name(), path),
            None => path.to_string(),
        }
    }

    pub fn seed(&self, key: &str, data: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_string());
    }

    /// Report `uri` for the next write instead of the derived one
    pub fn set_next_uri(&self, uri: &str) {
        *self.next_uri.lock().unwrap() = Some(uri.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn write(
        &self,
        path: &str,
        data: &str,
        directory: Directory,
    ) -> Result<FileWriteResult> {
        let uri = self
            .next_uri
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Self::key(path, Some(directory)));
        let mut files = self.files.lock().unwrap();
        files.insert(Self::key(path, Some(directory)), base64_payload(data).to_string());
        files.insert(uri.clone(), base64_payload(data).to_string());
        Ok(FileWriteResult { uri })
    }

    async fn read(&self, path: &str, directory: Option<Directory>) -> Result<FileReadResult> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let key = Self::key(path, directory);
        self.files
            .lock()
            .unwrap()
            .get(&key)
            .map(|data| FileReadResult { data: data.clone() })
            .ok_or_else(|| PhotoGalleryError::Storage(format!("File does not exist: {}", key)))
    }

    async fn delete(&self, path: &str, directory: Option<Directory>) -> Result<()> {
        let key = Self::key(path, directory);
        self.deleted.lock().unwrap().push(key.clone());
        self.files
            .lock()
            .unwrap()
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| PhotoGalleryError::Storage(format!("File does not exist: {}", key)))
    }
}

/// Memory preferences whose writes can be made to fail
#[derive(Default)]
pub struct FlakyPreferences {
    inner: MemoryPreferences,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for FlakyPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PhotoGalleryError::Preferences("Storage full".to_string()));
        }
        self.inner.set(key, value).await
    }
}

pub struct FakeFlash {
    available: bool,
    on: AtomicBool,
    intensity: Mutex<Option<f32>>,
    switches: AtomicUsize,
}

impl FakeFlash {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            on: AtomicBool::new(false),
            intensity: Mutex::new(None),
            switches: AtomicUsize::new(0),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }

    pub fn last_intensity(&self) -> Option<f32> {
        *self.intensity.lock().unwrap()
    }

    pub fn switch_count(&self) -> usize {
        self.switches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlashControl for FakeFlash {
    async fn is_available(&self) -> Result<bool> {
        Ok(self.available)
    }

    async fn is_switched_on(&self) -> Result<bool> {
        Ok(self.is_on())
    }

    async fn switch_on(&self, intensity: f32) -> Result<()> {
        self.switches.fetch_add(1, Ordering::SeqCst);
        *self.intensity.lock().unwrap() = Some(intensity);
        self.on.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn switch_off(&self) -> Result<()> {
        self.switches.fetch_add(1, Ordering::SeqCst);
        self.on.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeFetcher {
    blobs: Mutex<HashMap<String, Blob>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, url: &str, bytes: &[u8], content_type: Option<&str>) {
        self.blobs.lock().unwrap().insert(
            url.to_string(),
            Blob {
                bytes: bytes.to_vec(),
                content_type: content_type.map(|c| c.to_string()),
            },
        );
    }
}

#[async_trait]
impl ResourceFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Blob> {
        self.blobs
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| PhotoGalleryError::Fetch(format!("404 for {}", url)))
    }
}
