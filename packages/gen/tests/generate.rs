use std::fs;
use std::sync::Arc;

use regex::Regex;

use assetfs_gen::{collect, render, to_table, GenOptions, GeneratedEntry};
use assetfs_store::{AssetPath, AssetTable, Assets, EmbeddedFs};

mod fixture {
    include!("fixtures/assets.rs");
}

const SCRIPT: &str = "export function sortTable(t) { return [...t.rows].sort(); }\n";
const STYLE: &str = "table { border-collapse: collapse; }\n";

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("static/js")).unwrap();
    fs::create_dir_all(dir.path().join("static/css")).unwrap();
    fs::write(dir.path().join("static/js/table.js"), SCRIPT).unwrap();
    fs::write(dir.path().join("static/js/table.js.map"), "{}").unwrap();
    fs::write(dir.path().join("static/css/site.css"), STYLE).unwrap();
    dir
}

fn options_for(dir: &tempfile::TempDir) -> GenOptions {
    let mut options = GenOptions::new([dir.path().join("static")]);
    options.strip_prefix = Some(dir.path().to_string_lossy().replace('\\', "/"));
    options.ignore = Some(Regex::new(r"\.map$").unwrap());
    options.modtime = Some(1_500_000_000);
    options
}

#[test]
fn collects_sorted_entries() {
    let dir = fixture();
    let entries = collect(&options_for(&dir)).unwrap();

    let paths: Vec<String> = entries.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "/static",
            "/static/css",
            "/static/css/site.css",
            "/static/js",
            "/static/js/table.js",
        ]
    );

    let script = entries.iter().find(|e| e.path.name() == "table.js").unwrap();
    assert_eq!(script.size, SCRIPT.len() as u64);
    assert_eq!(script.modtime, 1_500_000_000);
    assert!(!script.is_dir);
    assert!(script.local.ends_with("static/js/table.js"));

    assert!(entries.iter().filter(|e| e.is_dir).all(|e| e.size == 0));
}

#[test]
fn collected_entries_serve_original_files() {
    let dir = fixture();
    let entries = collect(&options_for(&dir)).unwrap();
    let table = Arc::new(to_table(&entries));

    let embedded = EmbeddedFs::new(table.clone());
    assert_eq!(embedded.read("/static/js/table.js").unwrap().as_ref(), SCRIPT.as_bytes());
    assert_eq!(embedded.read("/static/css/site.css").unwrap().as_ref(), STYLE.as_bytes());
    assert!(embedded.read("/static/js/table.js.map").unwrap_err().is_not_found());

    // Local mode follows the recorded source locations.
    let assets = Assets::new(table, dir.path());
    fs::write(dir.path().join("static/js/table.js"), "edited();").unwrap();
    assert_eq!(assets.read_string(true, "/static/js/table.js").unwrap(), "edited();");
    assert_eq!(assets.read_string(false, "/static/js/table.js").unwrap(), SCRIPT);
}

#[test]
fn include_filter_keeps_directories() {
    let dir = fixture();
    let mut options = options_for(&dir);
    options.include = Some(Regex::new(r"\.css$").unwrap());

    let entries = collect(&options).unwrap();
    let files: Vec<String> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.path.to_string())
        .collect();
    assert_eq!(files, vec!["/static/css/site.css"]);
    assert!(entries.iter().any(|e| e.is_dir && e.path.name() == "js"));
}

#[test]
fn mount_prefix_relocates_assets() {
    let dir = fixture();
    let mut options = options_for(&dir);
    options.strip_prefix = Some(format!(
        "{}/static",
        dir.path().to_string_lossy().replace('\\', "/")
    ));
    options.mount_prefix = Some("/assets".to_string());

    let entries = collect(&options).unwrap();
    assert!(entries
        .iter()
        .any(|e| e.path.to_string() == "/assets/js/table.js"));
    assert!(entries.iter().all(|e| e.path.to_string().starts_with("/assets")));
}

#[test]
fn rendered_module_lists_every_path() {
    let dir = fixture();
    let options = options_for(&dir);
    let entries = collect(&options).unwrap();
    let source = render(&entries, &options).unwrap();

    for entry in &entries {
        assert!(source.contains(&format!("{:?}", entry.path.to_string())));
    }
    assert!(source.contains(&format!("size: {},", SCRIPT.len())));
    assert!(source.contains("modtime: 1500000000,"));
    assert!(!source.contains("table.js.map"));
}

#[test]
fn generated_module_compiles_and_serves() {
    let table = AssetTable::from_entries(fixture::FIXTURE_ASSETS).unwrap();
    assert_eq!(table.len(), 5);

    let embedded = EmbeddedFs::new(Arc::new(table));
    assert_eq!(embedded.read("/static/js/table.js").unwrap().as_ref(), SCRIPT.as_bytes());
    assert_eq!(embedded.read("/static/css/site.css").unwrap().as_ref(), STYLE.as_bytes());

    let record = embedded.table().lookup("/static/js/table.js").unwrap();
    assert_eq!(record.modtime(), 1_500_000_000);
    assert_eq!(record.local(), Some("static/js/table.js"));
    assert!(embedded.table().lookup("/static/js").unwrap().is_dir());
}

#[test]
fn render_reproduces_checked_in_module() {
    let entries: Vec<GeneratedEntry> = fixture::FIXTURE_ASSETS
        .iter()
        .map(|entry| GeneratedEntry {
            path: AssetPath::parse(entry.path).unwrap(),
            local: entry.local.to_string(),
            size: entry.size,
            modtime: entry.modtime,
            is_dir: entry.is_dir,
            compressed: entry.compressed.to_string(),
        })
        .collect();
    let options = GenOptions {
        name: "FIXTURE_ASSETS".to_string(),
        ..GenOptions::default()
    };

    assert_eq!(
        render(&entries, &options).unwrap(),
        include_str!("fixtures/assets.rs")
    );
}
