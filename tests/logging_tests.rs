use json_pathfind::finder::{count_matches, find_all};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn captured_debug_output(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("json_pathfind=debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn find_all_and_count_matches_log_the_same_summary() {
    let tree = json!({"a": ["x", "xy"], "b": "z"});
    let target = json!("x");

    let listed = captured_debug_output(|| {
        find_all(&tree, &target);
    });
    let counted = captured_debug_output(|| {
        count_matches(&tree, &target);
    });

    for out in [&listed, &counted] {
        assert!(out.contains("search complete"), "missing summary in {:?}", out);
        assert!(out.contains("matches=2"), "missing count in {:?}", out);
    }
}
