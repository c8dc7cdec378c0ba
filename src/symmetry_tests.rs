#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::notation::{Address, BOARD_SIZE};
    use crate::symmetry::{images, reflect, rotate90, Symmetry};

    fn arb_address() -> impl Strategy<Value = Address> {
        (0..BOARD_SIZE, 1..=BOARD_SIZE).prop_map(|(col, row)| Address::new(col, row))
    }

    #[test]
    fn test_rotate90_formula() {
        // (col, row) -> (row - 1, 15 - col)
        assert_eq!(rotate90(Address::new(0, 1)), Address::new(0, 15));
        assert_eq!(rotate90(Address::new(7, 8)), Address::new(7, 8)); // center fixed
        assert_eq!(rotate90(Address::new(14, 15)), Address::new(14, 1));
    }

    #[test]
    fn test_reflect_formula() {
        // (col, row) -> (col, 16 - row)
        assert_eq!(reflect(Address::new(0, 1)), Address::new(0, 15));
        assert_eq!(reflect(Address::new(7, 8)), Address::new(7, 8)); // on the axis
        assert_eq!(reflect(Address::new(3, 10)), Address::new(3, 6));
    }

    #[test]
    fn test_rotation_closure_every_cell() {
        for col in 0..BOARD_SIZE {
            for row in 1..=BOARD_SIZE {
                let addr = Address::new(col, row);
                let back = rotate90(rotate90(rotate90(rotate90(addr))));
                assert_eq!(back, addr, "rotation closure failed for {}", addr);
            }
        }
    }

    #[test]
    fn test_images_match_symmetry_order() {
        for col in 0..BOARD_SIZE {
            for row in 1..=BOARD_SIZE {
                let addr = Address::new(col, row);
                let all = images(addr);
                for (image, symmetry) in all.iter().zip(Symmetry::ALL) {
                    assert_eq!(*image, symmetry.apply(addr));
                }
            }
        }
    }

    #[test]
    fn test_images_distinct_in_general_position() {
        // b3 sits on no symmetry axis, so all 8 images differ.
        let all = images(Address::new(1, 3));
        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_images_coincide_on_axes() {
        // The center is fixed by the whole group.
        let center = Address::new(7, 8);
        assert!(images(center).iter().all(|&img| img == center));

        // A stone on the reflection axis has at most 4 distinct images.
        let on_axis = images(Address::new(3, 8));
        let distinct: HashSet<_> = on_axis.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_inverse_table() {
        assert_eq!(Symmetry::R0.inverse(), Symmetry::R0);
        assert_eq!(Symmetry::R90.inverse(), Symmetry::R270);
        assert_eq!(Symmetry::R180.inverse(), Symmetry::R180);
        assert_eq!(Symmetry::MR90.inverse(), Symmetry::MR90);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Symmetry::R0.to_string(), "R0");
        assert_eq!(Symmetry::M.to_string(), "MR0");
        assert_eq!(Symmetry::MR270.to_string(), "MR270");
    }

    proptest! {
        #[test]
        fn prop_rotation_closure(addr in arb_address()) {
            let back = rotate90(rotate90(rotate90(rotate90(addr))));
            prop_assert_eq!(back, addr);
        }

        #[test]
        fn prop_reflection_involution(addr in arb_address()) {
            prop_assert_eq!(reflect(reflect(addr)), addr);
        }

        #[test]
        fn prop_transforms_stay_on_board(addr in arb_address()) {
            for symmetry in Symmetry::ALL {
                let image = symmetry.apply(addr);
                prop_assert!(image.col() < BOARD_SIZE);
                prop_assert!((1..=BOARD_SIZE).contains(&image.row()));
            }
        }

        #[test]
        fn prop_inverse_undoes_transform(addr in arb_address()) {
            for symmetry in Symmetry::ALL {
                prop_assert_eq!(symmetry.inverse().apply(symmetry.apply(addr)), addr);
            }
        }
    }
}
