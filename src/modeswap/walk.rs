//! Subtree traversal applying the switch engine to every layer.
//!
//! This is the one place where per-layer failures are contained: a layer whose
//! references cannot be resolved is logged, counted as skipped, and the walk
//! carries on with its children and siblings. Mutations already applied are kept.

use crate::catalog::Catalogs;
use crate::engine::{switch_node, Outcome, Tally};
use crate::model::{Mode, Node};
use crate::naming::NameCodec;
use tracing::{debug, warn};

fn visit(node: &mut Node, catalogs: &Catalogs, codec: &NameCodec, target: Mode) -> Tally {
    match switch_node(node, catalogs, codec, target) {
        Ok(outcome) => {
            match &outcome {
                Outcome::Switched { from, to } => {
                    debug!(layer = %node.name, %from, %to, "switched");
                }
                Outcome::Skipped(reason) => {
                    debug!(layer = %node.name, %reason, "skipped");
                }
                Outcome::NotApplicable => {}
            }
            outcome.tally()
        }
        Err(e) => {
            warn!(layer = %node.name, error = %e, "switch failed, skipping layer");
            Tally::one_skipped()
        }
    }
}

/// Switch `root` and all of its descendants, pre-order, returning the summed tally.
pub fn walk(root: &mut Node, catalogs: &Catalogs, codec: &NameCodec, target: Mode) -> Tally {
    let mut tally = Tally::default();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        tally += visit(node, catalogs, codec, target);
        if node.kind.has_children() {
            stack.extend(node.children.iter_mut().rev());
        }
    }
    tally
}

/// Walk several roots in order.
pub fn walk_all<'a, I>(roots: I, catalogs: &Catalogs, codec: &NameCodec, target: Mode) -> Tally
where
    I: IntoIterator<Item = &'a mut Node>,
{
    roots
        .into_iter()
        .map(|root| walk(root, catalogs, codec, target))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SharedStyle, StyleId, SymbolMaster};

    struct Fixture {
        catalogs: Catalogs,
        body_light: StyleId,
        body_dark: StyleId,
        caption_light: StyleId,
    }

    fn fixture() -> Fixture {
        let body_light = SharedStyle::new("text/light/body");
        let body_dark = SharedStyle::new("text/dark/body");
        let caption_light = SharedStyle::new("text/light/caption");
        Fixture {
            body_light: body_light.id,
            body_dark: body_dark.id,
            caption_light: caption_light.id,
            catalogs: Catalogs {
                text_styles: vec![body_light, body_dark, caption_light],
                layer_styles: vec![],
                symbols: vec![
                    SymbolMaster::new("button/light/primary"),
                    SymbolMaster::new("button/dark/primary"),
                ],
            },
        }
    }

    #[test]
    fn container_sums_children() {
        let f = fixture();
        // First group: two switchable, one missing its dark variant -> {2,1}
        // Second group: three already dark -> {0,3}
        let mut root = Node::container("Screen")
            .child(
                Node::container("A")
                    .child(Node::text("a1").with_style(f.body_light))
                    .child(Node::text("a2").with_style(f.body_light))
                    .child(Node::text("a3").with_style(f.caption_light)),
            )
            .child(
                Node::container("B")
                    .child(Node::text("b1").with_style(f.body_dark))
                    .child(Node::text("b2").with_style(f.body_dark))
                    .child(Node::text("b3").with_style(f.body_dark)),
            );

        let tally = walk(&mut root, &f.catalogs, &NameCodec::default(), Mode::Dark);
        assert_eq!(tally, Tally::new(2, 4));
    }

    #[test]
    fn second_pass_is_idempotent() {
        let f = fixture();
        let light_button = f.catalogs.find_symbol("button/light/primary").unwrap().id;
        let mut root = Node::container("Screen")
            .child(Node::text("Body").with_style(f.body_light))
            .child(Node::instance("Submit", light_button));
        let codec = NameCodec::default();

        let first = walk(&mut root, &f.catalogs, &codec, Mode::Dark);
        assert_eq!(first, Tally::new(2, 0));

        let second = walk(&mut root, &f.catalogs, &codec, Mode::Dark);
        assert_eq!(second, Tally::new(0, 2));
    }

    #[test]
    fn failing_layer_does_not_abort_the_walk() {
        let f = fixture();
        let mut root = Node::container("Screen")
            .child(Node::text("Broken").with_style(StyleId::new()))
            .child(Node::text("Body").with_style(f.body_light));

        let tally = walk(&mut root, &f.catalogs, &NameCodec::default(), Mode::Dark);

        assert_eq!(tally, Tally::new(1, 1));
        assert_eq!(root.children[1].style, Some(f.body_dark));
    }

    #[test]
    fn deep_trees_do_not_recurse() {
        let f = fixture();
        let mut root = Node::text("Leaf").with_style(f.body_light);
        for depth in 0..50_000 {
            root = Node::container(format!("Level {}", depth)).child(root);
        }

        let tally = walk(&mut root, &f.catalogs, &NameCodec::default(), Mode::Dark);
        assert_eq!(tally, Tally::new(1, 0));

        // Tear down iteratively as well; the derived Drop would recurse.
        let mut stack = vec![root];
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }

    #[test]
    fn walk_all_visits_each_root() {
        let f = fixture();
        let mut roots = vec![
            Node::text("One").with_style(f.body_light),
            Node::shape("Plain"),
            Node::text("Two").with_style(f.body_dark),
        ];

        let tally = walk_all(roots.iter_mut(), &f.catalogs, &NameCodec::default(), Mode::Dark);
        assert_eq!(tally, Tally::new(1, 1));
    }
}
