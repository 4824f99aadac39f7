//! End-to-end cart flows.
//!
//! These tests drive a cart through user-level sequences and check both the
//! cart state and what each surface ends up showing.

#![allow(clippy::unwrap_used)]

use pocket_cart_core::{Catalog, Price, ProductId};
use pocket_cart_integration_tests::product;
use pocket_cart_widget::{
    Cart, CartEvent, HtmlSurface, RecordingSurface, RedrawPolicy, SurfaceCall, TextSurface,
};

// =============================================================================
// Add / Decrement Walkthrough
// =============================================================================

#[test]
fn test_add_twice_add_other_then_decrement_to_removal() {
    let one = product(1, 10);
    let two = product(2, 20);
    let mut cart = Cart::new(RecordingSurface::new());

    cart.add_item(&one).unwrap();
    cart.add_item(&one).unwrap();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(one.id), Some(2));
    assert_eq!(cart.total_price(), Price::from_units(20));

    cart.add_item(&two).unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_price(), Price::from_units(40));

    cart.decrement(one.id).unwrap();
    assert_eq!(cart.quantity_of(one.id), Some(1));
    assert_eq!(cart.total_price(), Price::from_units(30));

    cart.decrement(one.id).unwrap();
    assert_eq!(cart.quantity_of(one.id), None);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_price(), Price::from_units(20));
    assert_eq!(cart.surface().last_total(), Some(Price::from_units(20)));
}

#[test]
fn test_walkthrough_surface_calls() {
    let one = product(1, 10);
    let mut cart = Cart::new(RecordingSurface::new());

    cart.add_item(&one).unwrap();
    cart.increment(one.id).unwrap();
    cart.decrement(one.id).unwrap();
    cart.decrement(one.id).unwrap();

    assert_eq!(
        cart.surface().calls(),
        &[
            SurfaceCall::Redraw(vec![(one.id, 1)]),
            SurfaceCall::ShowTotal(Price::from_units(10)),
            SurfaceCall::PatchLine {
                id: one.id,
                quantity: 2,
                liked: false,
            },
            SurfaceCall::ShowTotal(Price::from_units(20)),
            SurfaceCall::PatchLine {
                id: one.id,
                quantity: 1,
                liked: false,
            },
            SurfaceCall::ShowTotal(Price::from_units(10)),
            SurfaceCall::Redraw(vec![]),
            SurfaceCall::ShowTotal(Price::ZERO),
        ]
    );
}

// =============================================================================
// Startup Behaviour
// =============================================================================

#[test]
fn test_seeding_sample_catalog() {
    let catalog = Catalog::sample();
    let mut cart = Cart::new(TextSurface::new());
    for item in &catalog {
        cart.add_item(item).unwrap();
    }

    assert_eq!(cart.len(), 4);
    assert_eq!(cart.total_price(), Price::from_units(60));
    let screen = cart.surface().screen();
    assert!(screen.starts_with("[1] Item 1  Quantity: 1  @ $10 = $10\n"));
    assert!(screen.ends_with("Total Price: $60\n"));
}

// =============================================================================
// HTML Surface
// =============================================================================

#[test]
fn test_html_page_tracks_every_mutation() {
    let catalog = Catalog::sample();
    let mut cart = Cart::new(HtmlSurface::default());
    for item in &catalog {
        cart.add_item(item).unwrap();
    }

    cart.increment(ProductId::new(3)).unwrap();
    cart.delete(ProductId::new(1)).unwrap();
    cart.toggle_like(ProductId::new(4)).unwrap();

    let surface = cart.surface();
    assert_eq!(surface.line_count(), 3);
    assert!(surface.line_html(ProductId::new(1)).is_none());
    assert!(surface.line_html(ProductId::new(3)).unwrap().contains("Quantity: 2"));
    assert!(surface.line_html(ProductId::new(4)).unwrap().contains("like-button liked"));
    assert_eq!(surface.total_text(), "Total Price: $65");

    let document = surface.document().unwrap();
    assert!(document.contains("<div id=\"total-price\">Total Price: $65</div>"));
}

#[test]
fn test_html_like_is_kept_across_delete() {
    let catalog = Catalog::sample();
    let mut cart = Cart::new(HtmlSurface::default());
    for event in ["add 2", "like 2", "delete 2", "add 2"] {
        cart.apply(event.parse().unwrap(), &catalog).unwrap();
    }

    let html = cart.surface().line_html(ProductId::new(2)).unwrap();
    assert!(html.contains("like-button liked"));
    assert!(html.contains("color: red"));
}

#[test]
fn test_html_controls_parse_back_into_events() {
    let mut cart = Cart::new(HtmlSurface::default());
    cart.add_item(&product(5, 12)).unwrap();

    let html = cart.surface().line_html(ProductId::new(5)).unwrap().to_string();
    let actions: Vec<&str> = html
        .split("data-action=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(actions, vec!["increment", "decrement", "delete", "toggle-like"]);

    for action in actions {
        let event = CartEvent::from_action(action, "5").unwrap();
        assert_eq!(event.product_id(), ProductId::new(5));
    }
}

#[test]
fn test_html_redraw_is_idempotent() {
    let mut cart = Cart::new(HtmlSurface::default());
    cart.add_item(&product(1, 10)).unwrap();
    cart.add_item(&product(2, 20)).unwrap();

    cart.display_cart().unwrap();
    let first = cart.surface().document().unwrap();
    cart.display_cart().unwrap();
    cart.display_cart().unwrap();
    assert_eq!(cart.surface().document().unwrap(), first);
}

// =============================================================================
// Redraw Policies
// =============================================================================

#[test]
fn test_policies_agree_on_final_state() {
    let catalog = Catalog::sample();
    let events: Vec<CartEvent> = ["add 1", "add 2", "+ 1", "like 2", "- 2", "add 3", "- 1"]
        .iter()
        .map(|event| event.parse().unwrap())
        .collect();

    let mut patched = Cart::with_policy(TextSurface::new(), RedrawPolicy::LocalPatch);
    let mut redrawn = Cart::with_policy(TextSurface::new(), RedrawPolicy::AlwaysRedraw);
    for event in &events {
        patched.apply(*event, &catalog).unwrap();
        redrawn.apply(*event, &catalog).unwrap();
    }

    assert_eq!(patched.entries(), redrawn.entries());
    assert_eq!(patched.surface().screen(), redrawn.surface().screen());
}

#[test]
fn test_teardown_returns_surface() {
    let mut cart = Cart::new(RecordingSurface::new());
    cart.add_item(&product(1, 10)).unwrap();

    let surface = cart.into_surface();
    assert_eq!(surface.redraw_count(), 1);
}
