#![allow(dead_code)]

use std::path::Path;

use dossier::config::content_path;
use dossier::content::RecordKind;
use serde_json::{json, Value};

pub fn project(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Zero-Day Hunter",
        "description": "Automated vulnerability scanner for legacy architecture.",
        "techStack": ["Python", "Rust", "Kali Linux"],
        "securityLevel": "TOP SECRET",
        "link": "https://github.com/example/zero-day-hunter"
    })
}

pub fn experience(id: &str) -> Value {
    json!({
        "id": id,
        "role": "Senior Security Engineer",
        "company": "Cyberdyne Systems",
        "period": "2022 - Present",
        "description": "Lead architect for autonomous defense grids.",
        "tech": ["C++", "Kubernetes", "eBPF"],
        "details": ["Patched kernel vulnerabilities"],
        "location": "Remote"
    })
}

pub fn education(id: &str) -> Value {
    json!({
        "id": id,
        "degree": "M.S. Cybersecurity",
        "school": "MIT",
        "year": "2018",
        "honors": "Summa Cum Laude"
    })
}

pub fn certification(id: &str) -> Value {
    json!({
        "id": id,
        "name": "OSCP",
        "issuer": "OffSec",
        "date": "2019",
        "verificationLink": "https://example.com/verify/oscp"
    })
}

pub fn article(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Bypassing ASLR in Modern Kernels",
        "summary": "Heap spraying against address space layout randomization.",
        "date": "Oct 12, 2023",
        "readTime": "8 min read",
        "tags": ["Exploit Dev", "Kernel", "Linux"],
        "link": "#",
        "content": "# Intro\n\nSome *markdown*."
    })
}

/// A valid record of `kind`.
pub fn record(kind: RecordKind, id: &str) -> Value {
    match kind {
        RecordKind::Project => project(id),
        RecordKind::Experience => experience(id),
        RecordKind::Education => education(id),
        RecordKind::Certification => certification(id),
        RecordKind::Article => article(id),
    }
}

/// Write `body` where the loader will look for `kind`/`id` under `root`.
pub fn write_raw(root: &Path, kind: RecordKind, id: &str, body: &str) {
    let path = root.join(content_path(kind, id));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

pub fn write_record(root: &Path, kind: RecordKind, id: &str, value: &Value) {
    write_raw(root, kind, id, &serde_json::to_string_pretty(value).unwrap());
}
