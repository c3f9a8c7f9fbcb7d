#![no_main]

use libfuzzer_sys::fuzz_target;
use mergeinsertion::{sort, sort_in, DequeChain};

fuzz_target!(|data: &[u8]| {

    let mut vec: Vec<u8> = data.to_vec();
    sort(&mut vec);

    for window in vec.windows(2) {
        assert!(window[0] <= window[1]);
    }

    let mut deque_sorted: Vec<u8> = data.to_vec();
    sort_in::<DequeChain, _>(&mut deque_sorted);
    assert_eq!(vec, deque_sorted);

    let mut counts = [0usize; 256];
    for &x in data {
        counts[x as usize] += 1;
    }
    for &x in &vec {
        counts[x as usize] -= 1;
    }
    assert!(counts.iter().all(|&c| c == 0));

});
