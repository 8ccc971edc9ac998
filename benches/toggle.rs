//! Benchmarks for drawer assembly and toggle operations
//!
//! Run with: cargo bench toggle

use sidedrawer::config::DrawerConfig;
use sidedrawer::drawer::Drawer;
use sidedrawer::geometry::{Extent, SlideOffsets};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_drawer() -> Drawer {
    let config = DrawerConfig::new()
        .with_id("bench")
        .with_size("300px")
        .with_overlay(true)
        .with_close_button(true);
    Drawer::new(config).expect("Failed to assemble drawer")
}

// ============================================================================
// Offset resolution
// ============================================================================

#[divan::bench(args = ["300px", "25rem", "45vh"])]
fn resolve_offsets(size: &str) {
    let extent = Extent::from(size);
    divan::black_box(SlideOffsets::resolve(&extent));
}

// ============================================================================
// Assembly
// ============================================================================

#[divan::bench]
fn assemble_drawer() {
    divan::black_box(make_drawer());
}

// ============================================================================
// Toggle cycles
// ============================================================================

#[divan::bench(args = [2, 10, 100])]
fn toggle_cycles(cycles: usize) {
    let mut drawer = make_drawer();
    for _ in 0..cycles {
        drawer.toggle();
    }
    divan::black_box(drawer.is_open());
}

// ============================================================================
// Repositioning
// ============================================================================

#[divan::bench(args = ["top", "right", "bottom", "left"])]
fn reposition(edge: &str) {
    let mut drawer = make_drawer();
    drawer.position(edge);
    divan::black_box(drawer.panel().styles().len());
}

// ============================================================================
// Markup projection
// ============================================================================

#[divan::bench]
fn render_markup() {
    let mut drawer = make_drawer();
    drawer
        .add_content("<ul><li>Home</li><li>About</li></ul>", "end")
        .expect("Failed to attach content");
    divan::black_box(drawer.to_markup());
}
