use super::*;

type Slot = Rc<RefCell<Option<Box<dyn Fn() -> usize>>>>;

fn self_referencing_slot() -> Slot {
    let slot: Slot = Rc::new(RefCell::new(None));
    let held = Rc::clone(&slot);
    *slot.borrow_mut() = Some(Box::new(move || Rc::strong_count(&held)));
    slot
}

#[test]
fn stored_callback_keeps_its_slot_alive() {
    let slot = self_referencing_slot();
    assert_eq!(Rc::strong_count(&slot), 2);
}

#[test]
fn vacate_breaks_the_cycle() {
    let slot = self_referencing_slot();
    let cb = vacate(&slot);
    assert!(cb.is_some());
    assert!(slot.borrow().is_none());
    drop(cb);
    assert_eq!(Rc::strong_count(&slot), 1);
}

#[test]
fn vacate_twice_is_harmless() {
    let slot = self_referencing_slot();
    drop(vacate(&slot));
    assert!(vacate(&slot).is_none());
    assert_eq!(Rc::strong_count(&slot), 1);
}
