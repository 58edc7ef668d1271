//! Diagnostics emitted by flipbook animators.
//!
//! Installs a capturing logger for this test binary, so keep env_logger out
//! of this file.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use meshflip::components::flipbook::{FlipbookAnimator, FlipbookClip};
use meshflip::components::meshslot::{MeshHandle, MeshSlot};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Warnings mentioning `needle`.
fn warnings_about(needle: &str) -> usize {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, target, msg)| {
            *level == Level::Warn && target == "meshflip" && msg.contains(needle)
        })
        .count()
}

#[test]
fn empty_frames_warns_exactly_once() {
    install();
    let clip = FlipbookClip::new("empty_cloth", Vec::new(), 5.0).unwrap();
    let mut anim = FlipbookAnimator::new(clip);
    let mut slot = MeshSlot::new();
    for _ in 0..100 {
        anim.tick(0.1, &mut slot);
    }
    assert_eq!(warnings_about("'empty_cloth'"), 1);
    assert!(slot.mesh.is_none());
}

#[test]
fn populated_frames_do_not_warn() {
    install();
    let frames = vec![MeshHandle::from("a"), MeshHandle::from("b")];
    let clip = FlipbookClip::new("full_cloth", frames, 5.0).unwrap();
    let mut anim = FlipbookAnimator::new(clip);
    let mut slot = MeshSlot::new();
    anim.tick(4.0, &mut slot);
    assert_eq!(warnings_about("'full_cloth'"), 0);
}
