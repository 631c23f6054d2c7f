//! Box placement for the cross.
//!
//! Boxes are visited band by band (top arm, middle band, bottom arm), each
//! band top to bottom and each row left to right. The countdown number and
//! date are threaded through that traversal: the first box carries the
//! largest number and the earliest date, the last box carries `0` and the
//! last day.

use chrono::NaiveDate;

use crate::settings::Settings;
use crate::types::{Length, LengthVector};

/// A horizontal strip of the cross, centred on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub rows: u32,
    pub columns: u32,
}

/// One box of the cross and the values it displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlacement {
    pub top_left: LengthVector,
    pub number: u32,
    pub date: NaiveDate,
}

impl BoxPlacement {
    pub fn bottom_right(&self, box_size: Length) -> LengthVector {
        self.top_left + LengthVector::new(box_size, -box_size)
    }

    pub fn center(&self, box_size: Length) -> LengthVector {
        self.top_left.midpoint(self.bottom_right(box_size))
    }
}

/// Top arm, middle band, bottom arm.
pub fn bands(settings: &Settings) -> [Band; 3] {
    let arm = Band { rows: settings.top_arm_height(), columns: settings.top_arm_width() };
    let middle = Band { rows: settings.top_arm_width(), columns: settings.cross_columns() };
    [arm, middle, arm]
}

/// Top-left corners of every box, in traversal order.
pub fn box_corners(settings: &Settings, page_middle: LengthVector) -> impl Iterator<Item = LengthVector> + use<> {
    let size = settings.box_size();
    let w = f64::from(settings.top_arm_width());
    let h = f64::from(settings.top_arm_height());
    let top = page_middle.y + size.scale(h + w / 2.0);

    bands(settings)
        .into_iter()
        .flat_map(|band| (0..band.rows).map(move |_| band.columns))
        .enumerate()
        .flat_map(move |(row, columns)| {
            let y = top - size.scale(row as f64);
            let left = page_middle.x - size.scale(f64::from(columns) / 2.0);
            (0..columns).map(move |column| LengthVector::new(left + size.scale(f64::from(column)), y))
        })
}

/// Every box with its countdown number and date, in traversal order.
///
/// The `(number, date)` pair is the fold state: each box takes the current
/// state, then the number drops by one and the date moves a day forward.
pub fn placements(settings: &Settings, page_middle: LengthVector) -> impl Iterator<Item = BoxPlacement> + use<> {
    let start = (settings.box_count().saturating_sub(1), settings.first_day());
    box_corners(settings, page_middle).scan(start, |(number, date), top_left| {
        let placement = BoxPlacement { top_left, number: *number, date: *date };
        *number = number.saturating_sub(1);
        if let Some(next) = date.succ_opt() {
            *date = next;
        }
        Some(placement)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsOptions;
    use std::collections::BTreeSet;

    fn settings(w: u32, h: u32) -> Settings {
        let last_day = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let options = SettingsOptions {
            box_size: Some(Length::from_points(10.0)),
            ..SettingsOptions::new(last_day).with_arms(w, h)
        };
        Settings::new(options).unwrap()
    }

    fn middle() -> LengthVector {
        LengthVector::new(Length::from_points(306.0), Length::from_points(396.0))
    }

    // Box centres in whole hundredths of a point, for exact set comparisons.
    fn centers(settings: &Settings) -> BTreeSet<(i64, i64)> {
        placements(settings, middle())
            .map(|p| {
                let c = p.center(settings.box_size());
                ((c.x.points() * 100.0).round() as i64, (c.y.points() * 100.0).round() as i64)
            })
            .collect()
    }

    #[test]
    fn bands_cover_every_box() {
        for (w, h) in [(1, 1), (6, 7), (9, 8)] {
            let s = settings(w, h);
            let total: u32 = bands(&s).iter().map(|b| b.rows * b.columns).sum();
            assert_eq!(total, s.box_count());
            assert_eq!(placements(&s, middle()).count() as u32, s.box_count());
        }
    }

    #[test]
    fn single_box_arms() {
        let s = settings(1, 1);
        let all: Vec<BoxPlacement> = placements(&s, middle()).collect();
        let corners: Vec<(f64, f64)> = all.iter().map(|p| (p.top_left.x.points(), p.top_left.y.points())).collect();

        // top arm, three-wide middle band, bottom arm
        assert_eq!(
            corners,
            vec![(301.0, 411.0), (291.0, 401.0), (301.0, 401.0), (311.0, 401.0), (301.0, 391.0)]
        );
        assert_eq!(all.iter().map(|p| p.number).collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn countdown_runs_from_first_to_last_day() {
        let s = settings(6, 7);
        let all: Vec<BoxPlacement> = placements(&s, middle()).collect();
        let first = all.first().unwrap();
        let last = all.last().unwrap();

        assert_eq!(first.number, 203);
        assert_eq!(first.date, s.first_day());
        assert_eq!(last.number, 0);
        assert_eq!(last.date, s.last_day());
        assert!(all.windows(2).all(|w| w[0].number == w[1].number + 1 && w[0].date.succ_opt() == Some(w[1].date)));
    }

    #[test]
    fn rows_run_top_to_bottom_left_to_right() {
        let s = settings(2, 3);
        let all: Vec<BoxPlacement> = placements(&s, middle()).collect();
        assert!(all.windows(2).all(|w| {
            let (a, b) = (w[0].top_left, w[1].top_left);
            b.y < a.y || (b.y == a.y && b.x > a.x)
        }));
    }

    #[test]
    fn cross_is_symmetric_about_page_middle() {
        for (w, h) in [(1, 1), (2, 3), (6, 7), (9, 8), (4, 6)] {
            let s = settings(w, h);
            let centers = centers(&s);
            let (mx, my) = (30600, 39600);
            let mirrored_x: BTreeSet<_> = centers.iter().map(|&(x, y)| (2 * mx - x, y)).collect();
            let mirrored_y: BTreeSet<_> = centers.iter().map(|&(x, y)| (x, 2 * my - y)).collect();
            assert_eq!(centers, mirrored_x, "{w}x{h} not symmetric left/right");
            assert_eq!(centers, mirrored_y, "{w}x{h} not symmetric top/bottom");
        }
    }

    #[test]
    fn boxes_never_overlap() {
        let s = settings(3, 4);
        let centers = centers(&s);
        assert_eq!(centers.len() as u32, s.box_count());
    }

    #[test]
    fn cross_fits_inside_flag_border() {
        let s = Settings::new(
            SettingsOptions::new(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()).with_arms(6, 7),
        )
        .unwrap();
        let half = s.flag_length().scale(0.5) - s.border_width();
        let m = middle();
        for p in placements(&s, m) {
            let br = p.bottom_right(s.box_size());
            assert!(p.top_left.x.points() >= (m.x - half).points() - 1e-9);
            assert!(br.x.points() <= (m.x + half).points() + 1e-9);
            assert!(p.top_left.y.points() <= (m.y + half).points() + 1e-9);
            assert!(br.y.points() >= (m.y - half).points() - 1e-9);
        }
    }
}
