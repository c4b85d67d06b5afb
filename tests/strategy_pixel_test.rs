//! Pixel verification tests for the edge strategies.
//!
//! Each strategy is driven end-to-end: build a network, prepare, render to a
//! framebuffer, and verify that the right pixels changed and the returned
//! handles describe what was drawn.

#![allow(clippy::unwrap_used)]

use arista_viz::output::PngEncoder;
use arista_viz::prelude::*;

/// A small directed network: a square of straight edges plus one curved
/// chord routed above the square.
fn square_network() -> Network {
    let mut net = Network::new(vec![
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Point::new(90.0, 90.0),
        Point::new(10.0, 90.0),
    ]);
    net.add_edge(0, 1).unwrap();
    net.add_edge(1, 2).unwrap();
    net.add_edge(2, 3).unwrap();
    net.add_edge(3, 0).unwrap();
    net.add_curved_edge(
        0,
        2,
        vec![
            Point::new(10.0, 10.0),
            Point::new(50.0, 35.0),
            Point::new(90.0, 90.0),
        ],
    )
    .unwrap();
    net
}

fn white_surface() -> Framebuffer {
    let mut fb = Framebuffer::new(100, 100).unwrap();
    fb.clear(Rgba::WHITE);
    fb
}

fn opaque(style: LineStyle) -> LineStyle {
    style.alpha(1.0).antialiased(false)
}

// ============================================================================
// PlainEdges
// ============================================================================

#[test]
fn plain_strokes_every_edge() {
    let net = square_network();
    let strategy = PlainEdges::new(&net).style(opaque(LineStyle::new().color(Rgba::BLACK)));

    let prepared = strategy.prepare().unwrap();
    assert_eq!(prepared.len(), net.edge_count());

    let mut fb = white_surface();
    let batch = strategy.render(&prepared, &mut fb).unwrap();

    assert_eq!(batch.strokes, 5);
    // The top edge of the square runs along y = 10.
    assert_eq!(fb.get_pixel(50, 10), Some(Rgba::BLACK));
    // The left edge runs along x = 10.
    assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
    // Well off any edge stays background.
    assert_eq!(fb.get_pixel(30, 75), Some(Rgba::WHITE));
}

#[test]
fn plain_default_style_is_translucent_grey() {
    let net = square_network();
    let strategy = PlainEdges::new(&net);
    let prepared = strategy.prepare().unwrap();

    let mut fb = white_surface();
    let batch = strategy.render(&prepared, &mut fb).unwrap();

    assert_eq!(batch.color, Rgba::rgb(0xab, 0xac, 0xab));
    assert!(fb.ink_count(Rgba::WHITE) > 0);
}

// ============================================================================
// WeightedEdges
// ============================================================================

#[test]
fn weighted_bins_partition_and_color_edges() {
    let net = square_network();
    let strategy = WeightedEdges::new(
        &net,
        WeightSource::Values(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        2,
    )
    .style(opaque(LineStyle::new()));

    let prepared = strategy.prepare().unwrap();
    assert_eq!(prepared.len(), net.edge_count());
    assert_eq!(prepared.bin_assignments(), &[0, 0, 1, 1, 1]);

    let mut fb = white_surface();
    let batches = strategy.render(&prepared, &mut fb).unwrap();

    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].strokes, 2);
    assert_eq!(batches[1].strokes, 3);
    assert_ne!(batches[0].color, batches[1].color);

    // Bin 0 (top edge, weight 1) and bin 1 (bottom edge, weight 3) got
    // their respective tier colors.
    assert_eq!(fb.get_pixel(50, 10), Some(batches[0].color));
    assert_eq!(fb.get_pixel(50, 90), Some(batches[1].color));
}

#[test]
fn weighted_betweenness_fallback_renders() {
    let net = square_network();
    let strategy = WeightedEdges::new(&net, WeightSource::property("betweenness"), 3)
        .palette(Palette::Viridis)
        .style(opaque(LineStyle::new()));

    let prepared = strategy.prepare().unwrap();
    let mut fb = white_surface();
    let batches = strategy.render(&prepared, &mut fb).unwrap();

    assert_eq!(batches.len(), 3);
    assert_eq!(
        batches.iter().map(|b| b.strokes).sum::<usize>(),
        net.edge_count()
    );
    assert!(fb.ink_count(Rgba::WHITE) > 0);
}

#[test]
fn weighted_unknown_property_fails_fast() {
    let net = square_network();
    let strategy = WeightedEdges::new(&net, WeightSource::property("conductance"), 2);

    let err = strategy.prepare().unwrap_err();
    assert!(err.to_string().contains("valid edge property"));
}

// ============================================================================
// CommunityGradient
// ============================================================================

#[test]
fn community_groups_by_ordered_pair() {
    let net = square_network();
    // Left two corners community 0, right two community 1.
    let strategy = CommunityGradient::new(&net, vec![0, 1, 1, 0])
        .style(opaque(LineStyle::new()));

    let prepared = strategy.prepare().unwrap();
    assert_eq!(prepared.len(), net.edge_count());

    let mut fb = white_surface();
    let handles = strategy.render(&prepared, &mut fb).unwrap();

    // Edges: (0,1)->01, (1,2)->11, (2,3)->10, (3,0)->00, chord (0,2)->01
    let keys: Vec<_> = handles.keys().copied().collect();
    assert_eq!(keys, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(handles[&(0, 1)].strokes, 2);
    assert_eq!(handles[&(1, 1)].strokes, 1);
    assert!(fb.ink_count(Rgba::WHITE) > 0);
}

#[test]
fn community_gradient_tints_edge_ends() {
    // One long horizontal edge between two communities.
    let mut net = Network::new(vec![Point::new(0.0, 1.0), Point::new(199.0, 1.0)]);
    net.add_curved_edge(
        0,
        1,
        (0..40)
            .map(|i| Point::new(i as f32 * 199.0 / 39.0, 1.0))
            .collect(),
    )
    .unwrap();

    let strategy = CommunityGradient::new(&net, vec![0, 1])
        .palette(Palette::Greyscale)
        .style(opaque(LineStyle::new()));

    let prepared = strategy.prepare().unwrap();
    let mut fb = Framebuffer::new(200, 3).unwrap();
    fb.clear(Rgba::rgb(0, 255, 0));

    let handles = strategy.render(&prepared, &mut fb).unwrap();
    let handle = handles[&(0, 1)];
    assert_eq!(handle.source, Rgba::BLACK);
    assert_eq!(handle.target, Rgba::WHITE);

    // Source end near black, target end near white.
    let start = fb.get_pixel(1, 1).unwrap();
    let end = fb.get_pixel(198, 1).unwrap();
    assert!(start.r < 60, "source end should be dark: {start:?}");
    assert!(end.r > 200, "target end should be light: {end:?}");
}

// ============================================================================
// OdGradient
// ============================================================================

#[test]
fn od_gradient_single_batch_over_all_edges() {
    let net = square_network();
    let strategy = OdGradient::new(&net, 10)
        .source_color(Rgba::BLUE)
        .target_color(Rgba::RED)
        .style(opaque(LineStyle::new()));

    let prepared = strategy.prepare().unwrap();
    assert_eq!(prepared.len(), net.edge_count());

    let mut fb = white_surface();
    let batch = strategy.render(&prepared, &mut fb).unwrap();

    assert_eq!(batch.strokes, net.edge_count());
    assert_eq!(batch.source, Rgba::BLUE);
    assert_eq!(batch.target, Rgba::RED);

    // Near node 0 on the top edge: source-tinted (blue dominates).
    let near_source = fb.get_pixel(12, 10).unwrap();
    assert!(near_source.b > near_source.r);
    // Near node 1 on the top edge: target-tinted (red dominates).
    let near_target = fb.get_pixel(88, 10).unwrap();
    assert!(near_target.r > near_target.b);
}

// ============================================================================
// End-to-end PNG output
// ============================================================================

#[test]
fn layered_strategies_encode_to_png() {
    let net = square_network();
    let mut fb = white_surface();

    let plain = PlainEdges::new(&net).style(LineStyle::new().alpha(0.3));
    let prepared_plain = plain.prepare().unwrap();
    plain.render(&prepared_plain, &mut fb).unwrap();

    let od = OdGradient::new(&net, 8);
    let prepared_od = od.prepare().unwrap();
    od.render(&prepared_od, &mut fb).unwrap();

    let bytes = PngEncoder::to_bytes(&fb).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();
    assert!(path.exists());
}
