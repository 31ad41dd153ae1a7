use savings_core::ledger::{colors, BASE_PALETTE};

#[test]
fn three_slices_use_first_three_base_colours() {
    assert_eq!(colors(3), BASE_PALETTE[..3].to_vec());
}

#[test]
fn ten_slices_add_two_generated_hues() {
    let palette = colors(10);
    assert_eq!(palette[..8], BASE_PALETTE.map(String::from));
    assert_eq!(palette[8..], ["hsl(0 70% 55%)", "hsl(180 70% 55%)"]);
}

#[test]
fn colours_are_deterministic() {
    assert_eq!(colors(20), colors(20));
}
