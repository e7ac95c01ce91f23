//! Glass list builder.
//!
//! Expands the glazed sections of a layout into pane line items. An
//! insulated unit carries two panes: when both panes share a kind they are
//! written as one item with a doubled count, otherwise as two items of the
//! same size. Styles that buy tempered glass separately get trailing
//! purchasing ("order") lines for each tempered section.

use crate::config::{GLASS_DECIMALS, GLASS_THICKNESS_MM};
use crate::layout::{GlassPolicy, GlazedSection};
use crate::model::{GlassItem, GlassLine, GlassType, PaneKind};
use crate::units::round;

/// Build the glass list for a set of glazed sections.
pub fn build_glass_list(
    glass: &GlassType,
    sections: &[GlazedSection],
    policy: GlassPolicy,
    quantity: u32,
    temper_secondary: bool,
) -> Vec<GlassItem> {
    let scale = if policy.scale_by_quantity { quantity } else { 1 };
    let (first, second) = glass.panes();

    let mut items = Vec::new();
    let mut orders = Vec::new();

    for section in sections {
        let tempered = glass.tempered || (section.secondary && temper_secondary);
        let units = section.units.saturating_mul(scale);
        let panes: Vec<(PaneKind, u32)> = if glass.is_uniform() {
            vec![(first, units.saturating_mul(2))]
        } else {
            vec![(first, units), (second, units)]
        };

        for (kind, qty) in panes {
            let item = GlassItem {
                line: GlassLine::Section(section.line),
                qty,
                kind,
                tempered,
                thickness: GLASS_THICKNESS_MM,
                width: round(section.glass_width, GLASS_DECIMALS),
                height: round(section.glass_height, GLASS_DECIMALS),
            };
            if policy.order_lines && tempered {
                orders.push(GlassItem {
                    line: GlassLine::Order(section.line),
                    ..item.clone()
                });
            }
            items.push(item);
        }
    }

    items.extend(orders);
    items
}
