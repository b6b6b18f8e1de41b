// Code generated by assetfs-gen. DO NOT EDIT.

use assetfs_store::AssetEntry;

pub static FIXTURE_ASSETS: &[AssetEntry] = &[
    AssetEntry::dir("/static", "static", 1500000000),
    AssetEntry::dir("/static/css", "static/css", 1500000000),
    AssetEntry {
        path: "/static/css/site.css",
        local: "static/css/site.css",
        size: 37,
        modtime: 1500000000,
        is_dir: false,
        compressed: "H4sIAAAAAAACAytJTMpJVahWSMovSkkt0k3Oz8lJLChOtVKAsawVarkAyx2HXiUAAAA=",
    },
    AssetEntry::dir("/static/js", "static/js", 1500000000),
    AssetEntry {
        path: "/static/js/table.js",
        local: "static/js/table.js",
        size: 60,
        modtime: 1500000000,
        is_dir: false,
        compressed: "H4sIAAAAAAACA0utKMgvKlFIK81LLsnMz1MoBvJCEpNyUjVKNBWqFYpSS0qL8hSi9fT0SvSK8suLY/VAKjQ0rRVquQATR6Q/PAAAAA==",
    },
];
