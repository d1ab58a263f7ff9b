#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::io;
use std::rc::Rc;

use anyhow::Result;
use serde_json::{Value, json};

use appstore::app::App;
use appstore::model::AppConfig;
use appstore::platform::{
    Backend, Bounds, Clock, DeviceProfile, Display, HttpResponse, Key, Keypad, Network, Rgb,
    SaveTarget, SavedFile, Storage, TextStyle,
};
use appstore::remote::CatalogClient;
use appstore::store::Store;

pub const BOARD: &str = "m5stack-cardputer";
pub const WIDTH: i32 = 240;
pub const HEIGHT: i32 = 135;

/// Where default-config catalog requests end up after the host redirect.
pub fn catalog_url(rel: &str) -> String {
    format!("http://ghp.iceis.co.uk/service/main/{}", rel)
}

/// Where default-config raw file requests end up after the host redirect.
pub fn raw_url(rel: &str) -> String {
    format!("http://ghp.iceis.co.uk/service/manual/{}", rel)
}

pub fn device() -> DeviceProfile {
    DeviceProfile {
        board: BOARD.to_string(),
        width: WIDTH,
        height: HEIGHT,
    }
}

// ---------------------------------------------------------------------------
// Storage

#[derive(Default)]
struct MemFs {
    files: BTreeMap<(Backend, String), Vec<u8>>,
    dirs: BTreeSet<(Backend, String)>,
    failing_writes: Vec<String>,
    writes: usize,
}

/// In-memory filesystem. Clones share contents, so a test can keep a handle after giving one
/// to the store.
#[derive(Clone, Default)]
pub struct MemStorage(Rc<RefCell<MemFs>>);

fn norm(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, backend: Backend, path: &str, bytes: &[u8]) {
        let mut fs = self.0.borrow_mut();
        let path = norm(path);
        let mut parent = path.as_str();
        while let Some(idx) = parent.rfind('/') {
            parent = &parent[..idx];
            if parent.is_empty() {
                break;
            }
            fs.dirs.insert((backend, parent.to_string()));
        }
        fs.files.insert((backend, path), bytes.to_vec());
    }

    pub fn put_json(&self, backend: Backend, path: &str, value: &Value) {
        self.put(backend, path, value.to_string().as_bytes());
    }

    pub fn get(&self, backend: Backend, path: &str) -> Option<Vec<u8>> {
        self.0.borrow().files.get(&(backend, norm(path))).cloned()
    }

    pub fn get_json(&self, backend: Backend, path: &str) -> Option<Value> {
        self.get(backend, path)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }

    pub fn exists(&self, backend: Backend, path: &str) -> bool {
        let fs = self.0.borrow();
        let key = (backend, norm(path));
        fs.files.contains_key(&key) || fs.dirs.contains(&key)
    }

    /// Every later write to a path containing `pattern` fails.
    pub fn fail_writes_containing(&self, pattern: &str) {
        self.0.borrow_mut().failing_writes.push(pattern.to_string());
    }

    pub fn write_count(&self) -> usize {
        self.0.borrow().writes
    }

    fn has_children(fs: &MemFs, backend: Backend, dir: &str) -> bool {
        let prefix = format!("{}/", dir);
        fs.files
            .keys()
            .chain(fs.dirs.iter())
            .any(|(b, p)| *b == backend && p.starts_with(&prefix))
    }
}

impl Storage for MemStorage {
    fn read(&self, backend: Backend, path: &str) -> io::Result<Vec<u8>> {
        self.get(backend, path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }

    fn write(&mut self, backend: Backend, path: &str, bytes: &[u8]) -> io::Result<()> {
        {
            let mut fs = self.0.borrow_mut();
            if fs.failing_writes.iter().any(|p| path.contains(p.as_str())) {
                return Err(io::Error::other("simulated write failure"));
            }
            fs.writes += 1;
        }
        self.put(backend, path, bytes);
        Ok(())
    }

    fn remove(&mut self, backend: Backend, path: &str) -> io::Result<bool> {
        let mut fs = self.0.borrow_mut();
        let key = (backend, norm(path));
        if fs.files.remove(&key).is_some() {
            return Ok(true);
        }
        if fs.dirs.contains(&key) {
            if MemStorage::has_children(&fs, backend, &key.1) {
                return Err(io::Error::other("directory not empty"));
            }
            fs.dirs.remove(&key);
            return Ok(true);
        }
        Ok(false)
    }

    fn list(&self, backend: Backend, dir: &str) -> io::Result<Vec<String>> {
        let fs = self.0.borrow();
        let dir = norm(dir);
        if !fs.dirs.contains(&(backend, dir.clone())) {
            return Err(io::Error::new(io::ErrorKind::NotFound, dir));
        }
        let prefix = format!("{}/", dir);
        let names: BTreeSet<String> = fs
            .files
            .keys()
            .chain(fs.dirs.iter())
            .filter(|(b, p)| *b == backend && p.starts_with(&prefix))
            .filter_map(|(_, p)| p[prefix.len()..].split('/').next().map(str::to_string))
            .collect();
        Ok(names.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Network

struct Route {
    status: u16,
    body: Vec<u8>,
}

struct NetState {
    connected: bool,
    routes: HashMap<String, Route>,
    broken: Vec<String>,
    requests: Vec<String>,
    storage: MemStorage,
}

/// Serves canned responses by exact URL; anything unknown is a 404. Saves write into the
/// shared [`MemStorage`].
#[derive(Clone)]
pub struct ScriptedNetwork(Rc<RefCell<NetState>>);

impl ScriptedNetwork {
    pub fn new(storage: MemStorage) -> Self {
        Self(Rc::new(RefCell::new(NetState {
            connected: true,
            routes: HashMap::new(),
            broken: Vec::new(),
            requests: Vec::new(),
            storage,
        })))
    }

    pub fn set_connected(&self, connected: bool) {
        self.0.borrow_mut().connected = connected;
    }

    pub fn route(&self, url: &str, status: u16, body: &[u8]) {
        self.0.borrow_mut().routes.insert(
            url.to_string(),
            Route {
                status,
                body: body.to_vec(),
            },
        );
    }

    pub fn route_json(&self, url: &str, value: &Value) {
        self.route(url, 200, value.to_string().as_bytes());
    }

    /// Requests to `url` fail at the transport level.
    pub fn break_url(&self, url: &str) {
        self.0.borrow_mut().broken.push(url.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.0.borrow().requests.clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.0.borrow().requests.iter().filter(|r| *r == url).count()
    }

    pub fn clear_requests(&self) {
        self.0.borrow_mut().requests.clear();
    }

    fn respond(&self, url: &str) -> io::Result<(u16, Vec<u8>)> {
        let mut state = self.0.borrow_mut();
        state.requests.push(url.to_string());
        if state.broken.iter().any(|b| b == url) {
            return Err(io::Error::other("connection reset"));
        }
        Ok(match state.routes.get(url) {
            Some(route) => (route.status, route.body.clone()),
            None => (404, b"not found".to_vec()),
        })
    }
}

impl Network for ScriptedNetwork {
    fn connected(&self) -> bool {
        self.0.borrow().connected
    }

    fn get(&mut self, url: &str) -> io::Result<HttpResponse> {
        let (status, body) = self.respond(url)?;
        Ok(HttpResponse { status, body })
    }

    fn save(&mut self, url: &str, target: SaveTarget<'_>) -> io::Result<SavedFile> {
        let (status, body) = self.respond(url)?;
        if status != 200 {
            return Ok(SavedFile { status, length: 0 });
        }
        let mut storage = self.0.borrow().storage.clone();
        storage.write(target.backend, target.path, &body)?;
        Ok(SavedFile {
            status,
            length: body.len() as u64,
        })
    }
}

// ---------------------------------------------------------------------------
// Display, keypad, clock

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(Bounds, Rgb),
    Outline(Bounds, Rgb),
    Text(String, i32, i32, TextStyle),
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DrawCall>,
    pub flushes: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, ..) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts().iter().any(|t| t == text)
    }

    pub fn outline_colors(&self) -> Vec<Rgb> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Outline(_, color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Display for RecordingDisplay {
    fn width(&self) -> i32 {
        WIDTH
    }

    fn height(&self) -> i32 {
        HEIGHT
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        self.calls.push(DrawCall::Fill(bounds, color));
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb) {
        self.calls.push(DrawCall::Outline(bounds, color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
        self.calls
            .push(DrawCall::Text(text.to_string(), x, y, style));
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct ScriptedKeypad {
    pub keys: VecDeque<Key>,
    pub discards: usize,
}

impl ScriptedKeypad {
    pub fn new(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            discards: 0,
        }
    }
}

impl Keypad for ScriptedKeypad {
    fn poll(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    fn discard_pending(&mut self) {
        self.discards += 1;
    }
}

/// Time only moves when a test advances it or the loop sleeps.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn at(ms: u64) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}

// ---------------------------------------------------------------------------
// Fixtures

pub fn app_json(slug: &str, version: &str) -> Value {
    json!({
        "name": slug.rsplit('/').next().unwrap_or(slug),
        "slug": slug,
        "description": format!("{} description", slug),
        "version": version,
    })
}

pub fn category_json(name: &str, slug: &str, last_updated: i64) -> Value {
    json!({ "name": name, "slug": slug, "count": 0, "lastUpdated": last_updated })
}

pub fn index_json(categories: &[Value]) -> Value {
    json!({ "categories": categories, "totalCategories": categories.len() })
}

pub fn listing_json(apps: &[Value]) -> Value {
    json!({ "apps": apps, "count": apps.len() })
}

pub fn metadata_json(category: &str, path: &str, version: &str, files: &[Value]) -> Value {
    json!({
        "owner": "someone",
        "repo": "scripts",
        "commit": "c0ffee",
        "path": path,
        "category": category,
        "version": version,
        "files": files,
    })
}

/// Store, client and shared fakes wired the way the binary wires the real host.
pub struct Rig {
    pub storage: MemStorage,
    pub network: ScriptedNetwork,
    pub config: AppConfig,
}

impl Rig {
    pub fn new() -> Self {
        let storage = MemStorage::new();
        let network = ScriptedNetwork::new(storage.clone());
        Self {
            storage,
            network,
            config: AppConfig::default(),
        }
    }

    pub fn store(&self) -> Store {
        Store::detect(Box::new(self.storage.clone()), self.config.paths.clone())
    }

    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(Box::new(self.network.clone()), &self.config)
    }

    pub fn app(&self) -> App {
        App::new(self.config.clone(), self.store(), self.client(), device())
    }

    pub fn serve_index(&self, categories: &[Value]) {
        self.network
            .route_json(&catalog_url("releases/categories.json"), &index_json(categories));
    }

    pub fn serve_listing(&self, slug: &str, apps: &[Value]) {
        self.network.route_json(
            &catalog_url(&format!("releases/category-{}.json", slug)),
            &listing_json(apps),
        );
    }

    pub fn serve_metadata(&self, slug: &str, meta: &Value) {
        self.network.route_json(
            &catalog_url(&format!(
                "repositories/{}/metadata.json",
                slug.replace(' ', "%20")
            )),
            meta,
        );
    }

    pub fn installed(&self) -> Result<Value> {
        self.storage
            .get_json(Backend::Flash, "/BruceAppStore/installed.json")
            .ok_or_else(|| anyhow::anyhow!("installed.json missing"))
    }
}
