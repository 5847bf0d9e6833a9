use pdf_paginate::constants::OVERLAP_FRACTION;
use pdf_paginate::*;

/// Content areas and image sizes that exercise multi-page splits
fn multi_page_cases() -> Vec<(f32, f32, u32, u32)> {
    let mut cases = Vec::new();
    for &(cw, ch) in &[(400.0, 600.0), (523.3, 728.5), (728.5, 523.3), (100.0, 100.0)] {
        for &(iw, ih) in &[
            (400, 3000),
            (800, 5000),
            (1234, 9876),
            (50, 4001),
            (3000, 60000),
            (640, 701),
        ] {
            cases.push((cw, ch, iw, ih));
        }
    }
    cases
}

/// Page count from integer arithmetic: ceil(ih·scale / (ch·9/10)), with
/// every case below using a scale of 1 or a whole-number content area.
fn expected_pages(ch: u64, ih: u64, scale_num: u64, scale_den: u64) -> usize {
    // ih·(num/den) / (ch·9/10) = 10·ih·num / (9·ch·den)
    let numerator = 10 * ih * scale_num;
    let denominator = 9 * ch * scale_den;
    numerator.div_ceil(denominator) as usize
}

fn spans(plan: &PaginationPlan) -> Vec<(f64, f64)> {
    plan.placements()
        .map(|(rect, _, _)| (rect.y0, rect.y1))
        .collect()
}

#[test]
fn test_slices_cover_whole_image() {
    for (cw, ch, iw, ih) in multi_page_cases() {
        let plan = plan(cw, ch, iw, ih, ScalingPolicy::ScaleToMultiplePages).unwrap();
        if plan.slice_count() < 2 {
            continue;
        }
        let spans = spans(&plan);
        assert_eq!(spans.first().unwrap().0, 0.0);
        assert_eq!(spans.last().unwrap().1, f64::from(ih));
        for pair in spans.windows(2) {
            assert!(
                pair[1].0 <= pair[0].1,
                "gap between {:?} and {:?} for {}x{}",
                pair[0],
                pair[1],
                iw,
                ih
            );
        }
    }
}

#[test]
fn test_edges_extend_by_overlap() {
    for (cw, ch, iw, ih) in multi_page_cases() {
        let plan = plan(cw, ch, iw, ih, ScalingPolicy::ScaleToMultiplePages).unwrap();
        let pages = plan.slice_count();
        if pages < 2 {
            continue;
        }
        let nominal = f64::from(ih) / pages as f64;
        let overlap = nominal * OVERLAP_FRACTION;
        let tolerance = f64::from(ih) * 1e-9;

        for (i, (start, end)) in spans(&plan).into_iter().enumerate() {
            let nominal_start = i as f64 * nominal;
            let nominal_end = (i + 1) as f64 * nominal;
            if i == 0 {
                assert_eq!(start, 0.0);
            } else {
                assert!((nominal_start - start - overlap).abs() < tolerance);
            }
            if i == pages - 1 {
                assert_eq!(end, f64::from(ih));
            } else {
                assert!((end - nominal_end - overlap).abs() < tolerance);
            }
        }
    }
}

#[test]
fn test_starts_strictly_increase() {
    for (cw, ch, iw, ih) in multi_page_cases() {
        let plan = plan(cw, ch, iw, ih, ScalingPolicy::ScaleToMultiplePages).unwrap();
        let spans = spans(&plan);
        for pair in spans.windows(2) {
            assert!(pair[1].0 > pair[0].0);
        }
    }
}

#[test]
fn test_slice_count_matches_formula() {
    // (content height, image height, expected pages) at scale 1
    let cases = [
        (600, 3000, 6),
        (600, 2700, 5),
        (600, 2701, 6),
        (12, 108, 10),
        (6, 27, 5),
        (100, 4001, 45),
        (728, 9876, 16),
    ];
    for (ch, ih, pages) in cases {
        assert_eq!(expected_pages(ch, ih, 1, 1), pages);
        let plan = plan(
            10_000.0,
            ch as f32,
            100,
            ih as u32,
            ScalingPolicy::ScaleToMultiplePages,
        )
        .unwrap();
        assert_eq!(plan.slice_count(), pages, "{} on {}pt pages", ih, ch);
        assert_eq!(plan.page_count(), pages);
    }
}

#[test]
fn test_slice_count_on_exact_boundaries() {
    // ih = k · ch · 0.9 exactly, for whole-number content heights
    for ch in [10u64, 20, 30, 40, 50, 60, 100, 600, 1000] {
        for k in 2..40u64 {
            let ih = k * ch * 9 / 10;
            let plan = plan(
                10_000.0,
                ch as f32,
                100,
                ih as u32,
                ScalingPolicy::ScaleToMultiplePages,
            )
            .unwrap();
            assert_eq!(plan.slice_count(), k as usize, "{} on {}pt pages", ih, ch);
        }
    }
}

#[test]
fn test_slice_count_with_downscale() {
    // 800 wide onto 400 halves every height
    let plan = plan(400.0, 600.0, 800, 5400, ScalingPolicy::ScaleToMultiplePages).unwrap();
    assert_eq!(plan.scale, 0.5);
    assert_eq!(plan.slice_count(), expected_pages(600, 5400, 1, 2));
    assert_eq!(plan.slice_count(), 5);
}

#[test]
fn test_rendered_width_uniform() {
    for (cw, ch, iw, ih) in multi_page_cases() {
        let plan = plan(cw, ch, iw, ih, ScalingPolicy::ScaleToMultiplePages).unwrap();
        let widths: Vec<f32> = plan.placements().map(|(_, w, _)| w).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(widths[0] <= cw + 0.001);
    }
}

#[test]
fn test_rendered_height_follows_span() {
    let plan = plan(400.0, 600.0, 800, 5000, ScalingPolicy::ScaleToMultiplePages).unwrap();
    assert_eq!(plan.scale, 0.5);
    for (rect, _, height) in plan.placements() {
        assert!((f64::from(height) - rect.height() * 0.5).abs() < 0.001);
    }
}

#[test]
fn test_single_page_short_circuit() {
    // Fits exactly after width scaling
    let plan = plan(400.0, 600.0, 800, 1200, ScalingPolicy::ScaleToMultiplePages).unwrap();
    assert_eq!(plan.elements.len(), 1);
    assert!(!plan
        .elements
        .iter()
        .any(|element| matches!(element, PageElement::PageBreak)));
}

#[test]
fn test_fit_to_page_preserves_aspect() {
    for &(iw, ih) in &[(800, 600), (123, 4567), (5000, 20), (1, 1)] {
        let plan = plan(400.0, 600.0, iw, ih, ScalingPolicy::FitToPage).unwrap();
        let (_, w, h) = plan.placements().next().unwrap();
        let rendered = w / h;
        let source = iw as f32 / ih as f32;
        assert!((rendered - source).abs() / source < 1e-4);
        assert!(w <= 400.0 + 0.01 && h <= 600.0 + 0.01);
    }
}

#[test]
fn test_scenario_fit_to_page() {
    let plan = plan(400.0, 600.0, 800, 600, ScalingPolicy::FitToPage).unwrap();
    assert_eq!(plan.scale, 0.5);
    assert_eq!(
        plan.elements,
        vec![PageElement::ImagePlacement {
            source_rect: SourceRect::new(0.0, 0.0, 800.0, 600.0),
            rendered_width: 400.0,
            rendered_height: 300.0,
        }]
    );
}

#[test]
fn test_scenario_multi_page() {
    let plan = plan(400.0, 600.0, 400, 3000, ScalingPolicy::ScaleToMultiplePages).unwrap();
    assert_eq!(plan.slice_count(), 6);
    let breaks = plan
        .elements
        .iter()
        .filter(|element| matches!(element, PageElement::PageBreak))
        .count();
    assert_eq!(breaks, 5);

    let spans = spans(&plan);
    assert_eq!(spans[0].0, 0.0);
    assert!((spans[0].1 - 550.0).abs() < 0.01);
    assert!((spans[1].0 - 450.0).abs() < 0.01);
    assert!((spans[1].1 - 1050.0).abs() < 0.01);
}

#[test]
fn test_scenario_original_size() {
    let plan = plan(400.0, 600.0, 100, 100, ScalingPolicy::OriginalSize).unwrap();
    assert_eq!(
        plan.elements,
        vec![PageElement::ImagePlacement {
            source_rect: SourceRect::full(100.0, 100.0),
            rendered_width: 100.0,
            rendered_height: 100.0,
        }]
    );
}

#[test]
fn test_scenario_margin_half_width() {
    let page_width = resolve("A4", Orientation::Portrait, 0.0)
        .unwrap()
        .physical_width;
    let geometry = resolve("A4", Orientation::Portrait, page_width / 2.0);
    assert!(matches!(geometry, Err(PaginateError::Config(_))));

    let geometry = PageGeometry::from_dimensions(400.0, 600.0, 200.0);
    assert!(matches!(geometry, Err(PaginateError::Config(_))));
}

#[test]
fn test_scenario_zero_width_image() {
    let result = plan(400.0, 600.0, 0, 600, ScalingPolicy::FitToPage);
    assert!(matches!(result, Err(PaginateError::InvalidInput(_))));
}

#[test]
fn test_plan_is_deterministic() {
    let first = plan(523.3, 728.5, 1234, 9876, ScalingPolicy::ScaleToMultiplePages).unwrap();
    let second = plan(523.3, 728.5, 1234, 9876, ScalingPolicy::ScaleToMultiplePages).unwrap();
    assert_eq!(first, second);
}
