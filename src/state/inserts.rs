//! Supplemental low-level scan inserts (SAILS and MRLE).
//!
//! Both options splice extra low-elevation cuts into a base pattern after
//! anchor steps identified by their elevation text.

use super::scan_step::{ScanStep, StepLabel};
use super::vcp::VcpName;
use serde::{Deserialize, Serialize};

/// Supplemental Adaptive Intra-Volume Low-level Scan selection.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SailsChoice {
    #[default]
    None,
    Sails1,
    Sails2,
    Sails3,
}

impl SailsChoice {
    pub fn all() -> &'static [SailsChoice] {
        &[
            SailsChoice::None,
            SailsChoice::Sails1,
            SailsChoice::Sails2,
            SailsChoice::Sails3,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SailsChoice::None => "None",
            SailsChoice::Sails1 => "SAILS 1",
            SailsChoice::Sails2 => "SAILS 2",
            SailsChoice::Sails3 => "SAILS 3",
        }
    }

    pub fn from_label(label: &str) -> Option<SailsChoice> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    pub fn is_none(&self) -> bool {
        *self == SailsChoice::None
    }

    /// Elevations after which the SAILS block is inserted.
    pub fn anchors(&self) -> &'static [&'static str] {
        match self {
            SailsChoice::None => &[],
            SailsChoice::Sails1 => &["3.1°"],
            SailsChoice::Sails2 => &["1.8°", "6.4°"],
            SailsChoice::Sails3 => &["1.3°", "4.0°", "8.0°"],
        }
    }

    /// Label filter for an anchor. SAILS 3 follows the velocity half of the
    /// 1.3° pair rather than the reflectivity half.
    fn anchor_label(&self, anchor: &str) -> Option<StepLabel> {
        match (self, anchor) {
            (SailsChoice::Sails3, "1.3°") => Some(StepLabel::V),
            _ => None,
        }
    }
}

/// Mid-volume Rescan of Low-level Elevations selection.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MrleChoice {
    #[default]
    None,
    Mrle2,
    Mrle3,
    Mrle4,
}

impl MrleChoice {
    pub fn all() -> &'static [MrleChoice] {
        &[
            MrleChoice::None,
            MrleChoice::Mrle2,
            MrleChoice::Mrle3,
            MrleChoice::Mrle4,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MrleChoice::None => "None",
            MrleChoice::Mrle2 => "MRLE 2",
            MrleChoice::Mrle3 => "MRLE 3",
            MrleChoice::Mrle4 => "MRLE 4",
        }
    }

    pub fn from_label(label: &str) -> Option<MrleChoice> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    pub fn is_none(&self) -> bool {
        *self == MrleChoice::None
    }

    /// Number of low-level elevations rescanned (0 for `None`).
    pub fn count(&self) -> u8 {
        match self {
            MrleChoice::None => 0,
            MrleChoice::Mrle2 => 2,
            MrleChoice::Mrle3 => 3,
            MrleChoice::Mrle4 => 4,
        }
    }
}

/// Elevation after which the MRLE block is inserted.
pub const MRLE_ANCHOR: &str = "5.1°";

/// Index of the last step whose elevation text equals `elevation`,
/// optionally restricted to steps carrying `label`.
pub fn find_last_step_with_angle(
    sequence: &[ScanStep],
    elevation: &str,
    label: Option<StepLabel>,
) -> Option<usize> {
    sequence.iter().rposition(|step| {
        step.elevation() == elevation && label.is_none_or(|l| step.label() == l)
    })
}

fn sails_block() -> [ScanStep; 2] {
    [
        ScanStep::z("0.5°", -0.5, 250.0),
        ScanStep::v("0.5°", -0.5, 80.0),
    ]
}

fn mrle_block(count: u8) -> Vec<ScanStep> {
    let mut block = vec![
        ScanStep::z("0.5°", -0.35, 250.0),
        ScanStep::v("0.5°", -0.40, 80.0),
        ScanStep::z("0.9°", -0.35, 250.0),
        ScanStep::v("0.9°", -0.40, 80.0),
    ];
    if count >= 3 {
        block.push(ScanStep::z("1.3°", -0.38, 231.0));
        block.push(ScanStep::v("1.3°", -0.40, 80.0));
    }
    if count == 4 {
        block.push(ScanStep::zv("1.8°", -0.43, 208.0, 80.0));
    }
    block
}

fn insert_after(sequence: &mut Vec<ScanStep>, index: usize, block: &[ScanStep]) {
    let tail = sequence.split_off(index + 1);
    sequence.extend_from_slice(block);
    sequence.extend(tail);
}

/// Build the playable sequence from a base pattern and insert selections.
///
/// Each non-`None` choice is applied; exclusivity between SAILS and MRLE is
/// the caller's concern. Anchors missing from `base` are skipped, and MRLE is
/// ignored for patterns that do not support it.
pub fn apply_inserts(
    base: Vec<ScanStep>,
    sails: SailsChoice,
    mrle: MrleChoice,
    vcp: VcpName,
) -> Vec<ScanStep> {
    let mut sequence = base;

    for anchor in sails.anchors() {
        match find_last_step_with_angle(&sequence, anchor, sails.anchor_label(anchor)) {
            Some(index) => insert_after(&mut sequence, index, &sails_block()),
            None => log::debug!("{}: no {} step, skipping insert", sails.label(), anchor),
        }
    }

    if !mrle.is_none() && vcp.supports_mrle() {
        match find_last_step_with_angle(&sequence, MRLE_ANCHOR, None) {
            Some(index) => insert_after(&mut sequence, index, &mrle_block(mrle.count())),
            None => log::debug!("{}: no {} step, skipping insert", mrle.label(), MRLE_ANCHOR),
        }
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scan_step::ConeRange;
    use crate::state::vcp::base_pattern;

    fn elevations(sequence: &[ScanStep]) -> Vec<&'static str> {
        sequence.iter().map(|s| s.elevation()).collect()
    }

    #[test]
    fn test_no_inserts_is_identity() {
        for vcp in VcpName::all() {
            let built = apply_inserts(
                base_pattern(*vcp),
                SailsChoice::None,
                MrleChoice::None,
                *vcp,
            );
            assert_eq!(built, base_pattern(*vcp));
        }
    }

    #[test]
    fn test_find_last_step_with_angle() {
        let pattern = base_pattern(VcpName::Vcp212);
        assert_eq!(find_last_step_with_angle(&pattern, "1.3°", None), Some(5));
        assert_eq!(
            find_last_step_with_angle(&pattern, "1.3°", Some(StepLabel::Z)),
            Some(4)
        );
        assert_eq!(find_last_step_with_angle(&pattern, "7.7°", None), None);
        assert_eq!(find_last_step_with_angle(&[], "0.5°", None), None);
    }

    #[test]
    fn test_sails1_follows_last_3_1() {
        let built = apply_inserts(
            base_pattern(VcpName::Vcp212),
            SailsChoice::Sails1,
            MrleChoice::None,
            VcpName::Vcp212,
        );
        assert_eq!(built.len(), 19);
        assert_eq!(built[8].elevation(), "3.1°");
        assert_eq!(built[9], ScanStep::z("0.5°", -0.5, 250.0));
        assert_eq!(built[10], ScanStep::v("0.5°", -0.5, 80.0));
        assert_eq!(built[11].elevation(), "4.0°");
    }

    #[test]
    fn test_sails2_inserts_twice() {
        let built = apply_inserts(
            base_pattern(VcpName::Vcp12),
            SailsChoice::Sails2,
            MrleChoice::None,
            VcpName::Vcp12,
        );
        assert_eq!(built.len(), 21);
        let e = elevations(&built);
        assert_eq!(&e[6..9], &["1.8°", "0.5°", "0.5°"]);
        let after_64 = e.iter().position(|a| *a == "6.4°").unwrap();
        assert_eq!(&e[after_64 + 1..after_64 + 3], &["0.5°", "0.5°"]);
        assert_eq!(e[after_64 + 3], "8.0°");
    }

    #[test]
    fn test_sails3_follows_velocity_1_3() {
        let built = apply_inserts(
            base_pattern(VcpName::Vcp212),
            SailsChoice::Sails3,
            MrleChoice::None,
            VcpName::Vcp212,
        );
        assert_eq!(built.len(), 23);

        let first_insert = built
            .iter()
            .position(|s| *s == ScanStep::z("0.5°", -0.5, 250.0))
            .unwrap();
        let predecessor = &built[first_insert - 1];
        assert_eq!(predecessor.label(), StepLabel::V);
        assert_eq!(predecessor.elevation(), "1.3°");
        assert_eq!(built[first_insert - 2].label(), StepLabel::Z);

        let e = elevations(&built);
        let after_40 = e.iter().position(|a| *a == "4.0°").unwrap();
        assert_eq!(&e[after_40 + 1..after_40 + 3], &["0.5°", "0.5°"]);
        let after_80 = e.iter().position(|a| *a == "8.0°").unwrap();
        assert_eq!(&e[after_80 + 1..after_80 + 3], &["0.5°", "0.5°"]);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        // VCP 35 has no 8.0° step, so SAILS 3 only lands twice
        let built = apply_inserts(
            base_pattern(VcpName::Vcp35),
            SailsChoice::Sails3,
            MrleChoice::None,
            VcpName::Vcp35,
        );
        assert_eq!(built.len(), 16);
    }

    #[test]
    fn test_mrle4_block_after_last_5_1() {
        let built = apply_inserts(
            base_pattern(VcpName::Vcp12),
            SailsChoice::None,
            MrleChoice::Mrle4,
            VcpName::Vcp12,
        );
        assert_eq!(built.len(), 17 + 7);
        assert_eq!(built[10].elevation(), "5.1°");

        let block = &built[11..18];
        assert_eq!(
            elevations(block),
            vec!["0.5°", "0.5°", "0.9°", "0.9°", "1.3°", "1.3°", "1.8°"]
        );
        assert_eq!(block[6].label(), StepLabel::ZV);
        assert_eq!(
            block[6].range(),
            ConeRange::Dual {
                range_z: 208.0,
                range_v: 80.0
            }
        );
        assert_eq!(built[18].elevation(), "6.4°");
    }

    #[test]
    fn test_mrle_block_sizes() {
        for (choice, added) in [
            (MrleChoice::Mrle2, 4),
            (MrleChoice::Mrle3, 6),
            (MrleChoice::Mrle4, 7),
        ] {
            let built = apply_inserts(
                base_pattern(VcpName::Vcp212),
                SailsChoice::None,
                choice,
                VcpName::Vcp212,
            );
            assert_eq!(built.len(), 17 + added, "{}", choice.label());
        }
    }

    #[test]
    fn test_mrle_ignored_for_unsupported_pattern() {
        let built = apply_inserts(
            base_pattern(VcpName::Vcp215),
            SailsChoice::None,
            MrleChoice::Mrle3,
            VcpName::Vcp215,
        );
        assert_eq!(built, base_pattern(VcpName::Vcp215));
    }

    #[test]
    fn test_mrle_without_anchor() {
        let base = vec![ScanStep::z("0.5°", -0.35, 250.0)];
        let built = apply_inserts(
            base.clone(),
            SailsChoice::None,
            MrleChoice::Mrle2,
            VcpName::Vcp12,
        );
        assert_eq!(built, base);
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(SailsChoice::from_label("SAILS 2"), Some(SailsChoice::Sails2));
        assert_eq!(MrleChoice::from_label("MRLE 3"), Some(MrleChoice::Mrle3));
        assert_eq!(MrleChoice::from_label("MRLE 5"), None);
        assert_eq!(MrleChoice::Mrle4.count(), 4);
    }
}
