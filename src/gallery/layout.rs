// SPDX-License-Identifier: MPL-2.0
//! Masonry layout engine.
//!
//! Images are resized to the column width (keeping their aspect ratio) and
//! dropped one by one into whichever column is currently the shortest. The
//! result is expressed in *layout space*: unscaled logical pixels with the
//! origin at the top-left corner of the wall. The viewport transform is
//! applied on top of it at draw and hit-test time.

use crate::config::{
    MEDIUM_COLUMNS_MAX_WIDTH, MEDIUM_COLUMN_COUNT, SINGLE_COLUMN_MAX_WIDTH, WIDE_COLUMN_COUNT,
};
use iced::{Point, Rectangle, Size};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Number of columns used for a viewport of the given width.
#[must_use]
pub fn column_count_for_width(width: f32) -> usize {
    if width < SINGLE_COLUMN_MAX_WIDTH {
        1
    } else if width < MEDIUM_COLUMNS_MAX_WIDTH {
        MEDIUM_COLUMN_COUNT
    } else {
        WIDE_COLUMN_COUNT
    }
}

/// Width of a single column once the gaps around and between columns are
/// taken out of the viewport width.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn column_width(viewport_width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((viewport_width - gap * (columns + 1.0)) / columns).max(0.0)
}

/// Resizes `natural` so it is exactly `width` wide, preserving aspect ratio.
#[must_use]
pub fn fit_to_width(natural: Size, width: f32) -> Size {
    if natural.width <= 0.0 {
        return Size::new(width, 0.0);
    }
    Size::new(width, width * natural.height / natural.width)
}

/// Returns the draw order for `len` images, shuffled when `rng` is given.
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: Option<&mut R>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if let Some(rng) = rng {
        order.shuffle(rng);
    }
    order
}

/// Draw order for a freshly loaded set of images.
///
/// With `shuffle` off this is the source order. A `seed` makes the shuffle
/// reproducible across runs.
#[must_use]
pub fn draw_order(len: usize, shuffle: bool, seed: Option<u64>) -> Vec<usize> {
    match (shuffle, seed) {
        (false, _) => shuffled_order::<StdRng>(len, None),
        (true, Some(seed)) => shuffled_order(len, Some(&mut StdRng::seed_from_u64(seed))),
        (true, None) => shuffled_order(len, Some(&mut rand::rng())),
    }
}

/// Where a single image ends up on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the image in the original source list.
    pub index: usize,
    /// Column the image was packed into.
    pub column: usize,
    /// Bounds in layout space.
    pub bounds: Rectangle,
}

impl Placement {
    /// Whether `point` (in layout space) lies on this tile. Edges count.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let b = self.bounds;
        point.x >= b.x && point.x <= b.x + b.width && point.y >= b.y && point.y <= b.y + b.height
    }
}

/// Result of packing a set of images into columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    placements: Vec<Placement>,
    columns: usize,
    column_width: f32,
    gap: f32,
    content_size: Size,
}

impl Layout {
    /// Packs `sizes` (natural image sizes, indexed by source position) into
    /// columns sized for `viewport_width`, visiting them in `order`.
    ///
    /// Indices in `order` that do not refer to an entry of `sizes` are skipped.
    #[must_use]
    pub fn compute(sizes: &[Size], order: &[usize], viewport_width: f32, gap: f32) -> Self {
        let columns = column_count_for_width(viewport_width);
        Self::compute_with_columns(sizes, order, viewport_width, columns, gap)
    }

    /// Same as [`Layout::compute`] but with an explicit column count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_with_columns(
        sizes: &[Size],
        order: &[usize],
        viewport_width: f32,
        columns: usize,
        gap: f32,
    ) -> Self {
        let columns = columns.max(1);
        let col_width = column_width(viewport_width, columns, gap);
        let mut heights = vec![gap; columns];
        let mut placements = Vec::with_capacity(order.len());

        for &index in order {
            let Some(&natural) = sizes.get(index) else {
                continue;
            };
            let column = shortest_column(&heights);
            let size = fit_to_width(natural, col_width);
            let x = gap + column as f32 * (col_width + gap);
            let y = heights[column];

            placements.push(Placement {
                index,
                column,
                bounds: Rectangle::new(Point::new(x, y), size),
            });
            heights[column] += size.height + gap;
        }

        let content_height = if placements.is_empty() {
            0.0
        } else {
            heights.iter().copied().fold(0.0, f32::max)
        };

        Self {
            placements,
            columns,
            column_width: col_width,
            gap,
            content_size: Size::new(viewport_width.max(0.0), content_height),
        }
    }

    /// Tiles in draw order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of the image with the given source index.
    #[must_use]
    pub fn placement_of(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.index == index)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Total size of the wall in layout space.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Index of the shortest column; ties go to the leftmost one.
fn shortest_column(heights: &[f32]) -> usize {
    let mut best = 0;
    for (column, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[best] {
            best = column;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn identity(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(column_count_for_width(320.0), 1);
        assert_eq!(column_count_for_width(599.9), 1);
        assert_eq!(column_count_for_width(600.0), 3);
        assert_eq!(column_count_for_width(1199.0), 3);
        assert_eq!(column_count_for_width(1200.0), 7);
        assert_eq!(column_count_for_width(2560.0), 7);
    }

    #[test]
    fn column_width_removes_gaps() {
        // 3 columns, 4 gaps of 5px: (620 - 20) / 3 = 200
        assert_abs_diff_eq!(column_width(620.0, 3, 5.0), 200.0);
        assert_abs_diff_eq!(column_width(3.0, 3, 5.0), 0.0);
    }

    #[test]
    fn fit_to_width_preserves_aspect_ratio() {
        let size = fit_to_width(Size::new(400.0, 300.0), 200.0);
        assert_abs_diff_eq!(size.width, 200.0);
        assert_abs_diff_eq!(size.height, 150.0);

        let tall = fit_to_width(Size::new(100.0, 400.0), 50.0);
        assert_abs_diff_eq!(tall.height, 200.0);
    }

    #[test]
    fn fit_to_width_handles_degenerate_width() {
        let size = fit_to_width(Size::new(0.0, 300.0), 200.0);
        assert_abs_diff_eq!(size.height, 0.0);
    }

    #[test]
    fn single_column_stacks_with_gap() {
        let sizes = [Size::new(100.0, 100.0), Size::new(100.0, 50.0)];
        let layout = Layout::compute(&sizes, &identity(2), 110.0, 5.0);

        assert_eq!(layout.columns(), 1);
        let p = layout.placements();
        assert_abs_diff_eq!(p[0].bounds.x, 5.0);
        assert_abs_diff_eq!(p[0].bounds.y, 5.0);
        assert_abs_diff_eq!(p[0].bounds.width, 100.0);
        assert_abs_diff_eq!(p[0].bounds.height, 100.0);
        assert_abs_diff_eq!(p[1].bounds.y, 110.0);
        assert_abs_diff_eq!(p[1].bounds.height, 50.0);
        assert_abs_diff_eq!(layout.content_size().height, 165.0);
    }

    #[test]
    fn images_go_to_shortest_column() {
        // Column width is 200 at 620px wide.
        let sizes = [
            Size::new(200.0, 400.0), // col 0, ends at 5 + 400 + 5 = 410
            Size::new(200.0, 100.0), // col 1, ends at 110
            Size::new(200.0, 200.0), // col 2, ends at 210
            Size::new(200.0, 50.0),  // shortest is col 1
            Size::new(200.0, 50.0),  // col 1 now ends at 165, still shortest
        ];
        let layout = Layout::compute(&sizes, &identity(5), 620.0, 5.0);

        let columns: Vec<usize> = layout.placements().iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 1, 1]);

        let fourth = layout.placement_of(3).expect("placed");
        assert_abs_diff_eq!(fourth.bounds.x, 210.0);
        assert_abs_diff_eq!(fourth.bounds.y, 110.0);
    }

    #[test]
    fn ties_go_to_leftmost_column() {
        let sizes = [Size::new(10.0, 10.0); 3];
        let layout = Layout::compute(&sizes, &identity(3), 620.0, 5.0);
        let columns: Vec<usize> = layout.placements().iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn every_tile_has_column_width() {
        let sizes = [
            Size::new(640.0, 480.0),
            Size::new(1920.0, 1080.0),
            Size::new(300.0, 900.0),
        ];
        let layout = Layout::compute(&sizes, &identity(3), 1400.0, 5.0);
        for placement in layout.placements() {
            assert_abs_diff_eq!(placement.bounds.width, layout.column_width());
        }
    }

    #[test]
    fn tiles_in_a_column_never_overlap() {
        let sizes: Vec<Size> = (1..=20)
            .map(|i| Size::new(100.0, 30.0 * i as f32))
            .collect();
        let layout = Layout::compute(&sizes, &identity(sizes.len()), 900.0, 5.0);

        for column in 0..layout.columns() {
            let mut tiles: Vec<_> = layout
                .placements()
                .iter()
                .filter(|p| p.column == column)
                .collect();
            tiles.sort_by(|a, b| a.bounds.y.total_cmp(&b.bounds.y));
            for pair in tiles.windows(2) {
                let bottom = pair[0].bounds.y + pair[0].bounds.height;
                assert!(bottom + layout.gap() <= pair[1].bounds.y + 1e-3);
            }
        }
    }

    #[test]
    fn placements_keep_source_index_under_custom_order() {
        let sizes = [
            Size::new(10.0, 10.0),
            Size::new(10.0, 20.0),
            Size::new(10.0, 30.0),
        ];
        let layout = Layout::compute(&sizes, &[2, 0, 1], 110.0, 5.0);

        let indices: Vec<usize> = layout.placements().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![2, 0, 1]);
        // Image 2 is drawn first, so it sits at the top.
        assert_abs_diff_eq!(layout.placement_of(2).expect("placed").bounds.y, 5.0);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let sizes = [Size::new(10.0, 10.0)];
        let layout = Layout::compute(&sizes, &[0, 5], 110.0, 5.0);
        assert_eq!(layout.placements().len(), 1);
    }

    #[test]
    fn empty_layout_has_no_height() {
        let layout = Layout::compute(&[], &[], 800.0, 5.0);
        assert!(layout.is_empty());
        assert_abs_diff_eq!(layout.content_size().height, 0.0);
    }

    #[test]
    fn unshuffled_order_is_identity() {
        let order = shuffled_order::<StdRng>(4, None);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn shuffled_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut order = shuffled_order(50, Some(&mut rng));
        order.sort_unstable();
        assert_eq!(order, identity(50));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            shuffled_order(16, Some(&mut a)),
            shuffled_order(16, Some(&mut b))
        );
    }

    #[test]
    fn draw_order_without_shuffle_keeps_sources_in_order() {
        assert_eq!(draw_order(3, false, Some(9)), vec![0, 1, 2]);
    }

    #[test]
    fn draw_order_with_seed_is_stable() {
        let first = draw_order(20, true, Some(1234));
        assert_eq!(first, draw_order(20, true, Some(1234)));

        let mut sorted = first;
        sorted.sort_unstable();
        assert_eq!(sorted, identity(20));
    }

    #[test]
    fn draw_order_without_seed_is_a_permutation() {
        let mut order = draw_order(12, true, None);
        order.sort_unstable();
        assert_eq!(order, identity(12));
    }
}
