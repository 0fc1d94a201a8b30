use std::collections::VecDeque;

use lazy_static::*;

use crate::DecimalBigInt;
use crate::config::DigitConfig;
use crate::decimal_constants::*;

// digits are listed least significant first
macro_rules! cached {
    ($($d: expr),*) => {
        DecimalBigInt::from_raw(VecDeque::from(vec![$($d),*]), DigitConfig::default())
    };
}

lazy_static! {
    pub static ref SMALL_CACHE: [DecimalBigInt; MAX_CONSTANT + 1] = [
        cached![0],
        cached![1],
        cached![2],
        cached![3],
        cached![4],
        cached![5],
        cached![6],
        cached![7],
        cached![8],
        cached![9],
        cached![0, 1],
        cached![1, 1],
        cached![2, 1],
        cached![3, 1],
        cached![4, 1],
        cached![5, 1],
        cached![6, 1],
    ];
}
