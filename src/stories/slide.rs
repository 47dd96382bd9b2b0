use crate::ui::Gradient;

/// One step of the intro sequence. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub index: usize,
    pub text: &'static str,
    pub icon: &'static str,
    pub background: Gradient,
}

pub fn intro_slides() -> Vec<Slide> {
    vec![
        Slide {
            index: 0,
            text: "Kalian lagi laper?",
            icon: "🤔",
            background: Gradient::new(0xdc2626, 0xb91c1c, 0x7f1d1d), // Red
        },
        Slide {
            index: 1,
            text: "Mau makanan yang bisa dijadiin camilan atau dibarengin dengan nasi?",
            icon: "🍚",
            background: Gradient::new(0xf97316, 0xea580c, 0xc2410c), // Orange
        },
        Slide {
            index: 2,
            text: "Mending makan ini aja deh!!??",
            icon: "🥟✨",
            background: Gradient::new(0xeab308, 0xca8a04, 0xa16207), // Gold
        },
    ]
}
