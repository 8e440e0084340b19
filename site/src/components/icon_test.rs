use super::*;

const ALL: [IconKind; 20] = [
    IconKind::Award,
    IconKind::CheckCircle,
    IconKind::ChevronDown,
    IconKind::ChevronLeft,
    IconKind::ChevronRight,
    IconKind::Clock,
    IconKind::Layers,
    IconKind::Leaf,
    IconKind::Mail,
    IconKind::MapPin,
    IconKind::Menu,
    IconKind::Moon,
    IconKind::Package,
    IconKind::Phone,
    IconKind::Send,
    IconKind::Shield,
    IconKind::Sun,
    IconKind::Truck,
    IconKind::Users,
    IconKind::X,
];

#[test]
fn every_icon_draws_something() {
    for kind in ALL {
        assert!(!kind.paths().is_empty(), "{kind:?} has no paths");
    }
}

#[test]
fn path_data_starts_with_a_move() {
    for kind in ALL {
        for d in kind.paths() {
            assert!(d.starts_with('M') || d.starts_with('m'), "{kind:?}: {d}");
        }
    }
}

#[test]
fn circles_fit_the_view_box() {
    for kind in ALL {
        for &(cx, cy, r) in kind.circles() {
            assert!(r > 0.0);
            assert!(cx - r >= 0.0 && cx + r <= 24.0, "{kind:?}");
            assert!(cy - r >= 0.0 && cy + r <= 24.0, "{kind:?}");
        }
    }
}
