pub mod png2zspr;
pub mod rom2zspr;
pub mod zspr2png;
pub mod zspr_info;
