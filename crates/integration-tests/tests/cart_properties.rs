//! Property tests over random event sequences.
//!
//! A plain ordered list of `(id, quantity)` pairs serves as the model; after
//! every event the cart must agree with it.

#![allow(clippy::unwrap_used)]

use pocket_cart_core::{Catalog, Price, ProductId};
use pocket_cart_widget::{Cart, CartEvent, RecordingSurface, RedrawPolicy};
use proptest::prelude::*;

fn arb_id() -> impl Strategy<Value = ProductId> {
    (1..=5_i32).prop_map(ProductId::new)
}

fn arb_event() -> impl Strategy<Value = CartEvent> {
    prop_oneof![
        3 => arb_id().prop_map(CartEvent::Add),
        1 => arb_id().prop_map(CartEvent::Remove),
        2 => arb_id().prop_map(CartEvent::Increment),
        2 => arb_id().prop_map(CartEvent::Decrement),
        1 => arb_id().prop_map(CartEvent::Delete),
        1 => arb_id().prop_map(CartEvent::ToggleLike),
    ]
}

fn arb_policy() -> impl Strategy<Value = RedrawPolicy> {
    prop_oneof![Just(RedrawPolicy::LocalPatch), Just(RedrawPolicy::AlwaysRedraw)]
}

/// Apply `event` to the model. Adds of ids outside the catalog are skipped.
fn apply_to_model(model: &mut Vec<(ProductId, u32)>, catalog: &Catalog, event: CartEvent) {
    let position = model.iter().position(|(id, _)| *id == event.product_id());
    match (event, position) {
        (CartEvent::Add(id), None) => {
            if catalog.get(id).is_some() {
                model.push((id, 1));
            }
        }
        (CartEvent::Add(_) | CartEvent::Increment(_), Some(i)) => {
            if let Some(slot) = model.get_mut(i) {
                slot.1 += 1;
            }
        }
        (CartEvent::Decrement(_), Some(i)) => {
            if model.get(i).is_some_and(|(_, quantity)| *quantity > 1) {
                if let Some(slot) = model.get_mut(i) {
                    slot.1 -= 1;
                }
            } else {
                model.remove(i);
            }
        }
        (CartEvent::Remove(_) | CartEvent::Delete(_), Some(i)) => {
            model.remove(i);
        }
        _ => {}
    }
}

fn model_total(model: &[(ProductId, u32)], catalog: &Catalog) -> Price {
    model
        .iter()
        .map(|(id, quantity)| catalog.get(*id).unwrap().price.times(*quantity))
        .sum()
}

proptest! {
    #[test]
    fn prop_cart_matches_model(
        events in prop::collection::vec(arb_event(), 0..60),
        policy in arb_policy(),
    ) {
        let catalog = Catalog::sample();
        let mut cart = Cart::with_policy(RecordingSurface::new(), policy);
        let mut model: Vec<(ProductId, u32)> = Vec::new();

        for event in events {
            let expect_ok = !matches!(event, CartEvent::Add(id) if catalog.get(id).is_none());
            prop_assert_eq!(cart.apply(event, &catalog).is_ok(), expect_ok);
            apply_to_model(&mut model, &catalog, event);

            let actual: Vec<(ProductId, u32)> = cart
                .entries()
                .iter()
                .map(|entry| (entry.product().id, entry.quantity()))
                .collect();
            prop_assert_eq!(&actual, &model);
            prop_assert!(cart.entries().iter().all(|entry| entry.quantity() >= 1));
            prop_assert_eq!(cart.total_price(), model_total(&model, &catalog));
        }
    }

    #[test]
    fn prop_quantity_equals_add_count(ids in prop::collection::vec(1..=4_i32, 0..40)) {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(RecordingSurface::new());
        for id in &ids {
            cart.add_item(catalog.get(ProductId::new(*id)).unwrap()).unwrap();
        }

        for id in 1..=4_i32 {
            let added = u32::try_from(ids.iter().filter(|added| **added == id).count()).unwrap();
            let expected = if added == 0 { None } else { Some(added) };
            prop_assert_eq!(cart.quantity_of(ProductId::new(id)), expected);
        }
    }

    #[test]
    fn prop_shown_total_tracks_state(events in prop::collection::vec(arb_event(), 1..40)) {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(RecordingSurface::new());
        cart.display_cart().unwrap();

        for event in events {
            let _ = cart.apply(event, &catalog);
            prop_assert_eq!(cart.surface().last_total(), Some(cart.total_price()));
        }
    }

    #[test]
    fn prop_remove_absent_id_is_noop(
        ids in prop::collection::vec(1..=3_i32, 0..20),
        absent in 10..100_i32,
    ) {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(RecordingSurface::new());
        for id in ids {
            cart.add_item(catalog.get(ProductId::new(id)).unwrap()).unwrap();
        }
        let before = cart.entries().to_vec();

        cart.remove_item(ProductId::new(absent)).unwrap();
        prop_assert_eq!(cart.entries(), before.as_slice());
    }

    #[test]
    fn prop_double_like_is_identity(quantity in 1..10_u32, id in 1..=4_i32) {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(RecordingSurface::new());
        let product = catalog.get(ProductId::new(id)).unwrap();
        for _ in 0..quantity {
            cart.add_item(product).unwrap();
        }
        let before = cart.entries().to_vec();
        let total = cart.total_price();

        cart.toggle_like(product.id).unwrap();
        cart.toggle_like(product.id).unwrap();

        prop_assert_eq!(cart.entries(), before.as_slice());
        prop_assert_eq!(cart.total_price(), total);
    }
}
