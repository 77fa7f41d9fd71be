// Strategy: the sort context delegates to whichever algorithm it was given.

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;

pub trait SortingStrategy {
    fn name(&self) -> &'static str;
    fn sort(&self, data: &mut [i32]);
}

pub struct BubbleSort;

impl SortingStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, data: &mut [i32]) {
        let len = data.len();
        for pass in 0..len {
            let mut swapped = false;
            for i in 0..len - 1 - pass {
                if data[i] > data[i + 1] {
                    data.swap(i, i + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

pub struct QuickSort;

impl QuickSort {
    // Hoare partition around the middle element. Returns `split` such that
    // `data[..split]` <= pivot <= `data[split..]`, both sides non-empty.
    // Keys equal to the pivot are swapped across, so runs of equal keys
    // still split near the middle.
    fn partition(data: &mut [i32]) -> usize {
        let pivot = data[(data.len() - 1) / 2];
        let mut i = 0;
        let mut j = data.len() - 1;
        loop {
            while data[i] < pivot {
                i += 1;
            }
            while data[j] > pivot {
                j -= 1;
            }
            if i >= j {
                return j + 1;
            }
            data.swap(i, j);
            i += 1;
            j -= 1;
        }
    }

    // Recurses into the smaller side only, so depth stays logarithmic.
    fn quick_sort(mut data: &mut [i32]) {
        while data.len() > 1 {
            let split = Self::partition(data);
            let (left, right) = std::mem::take(&mut data).split_at_mut(split);
            if left.len() < right.len() {
                Self::quick_sort(left);
                data = right;
            } else {
                Self::quick_sort(right);
                data = left;
            }
        }
    }
}

impl SortingStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn sort(&self, data: &mut [i32]) {
        Self::quick_sort(data);
    }
}

pub struct SortContext {
    strategy: Box<dyn SortingStrategy>,
}

impl SortContext {
    pub fn new(strategy: Box<dyn SortingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortingStrategy>) {
        self.strategy = strategy;
    }

    pub fn execute(&self, data: &mut [i32], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "sorting by {}", self.strategy.name())?;
        self.strategy.sort(data);
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let input = [5, 2, 7, 1, 9];

    let mut context = SortContext::new(Box::new(BubbleSort));
    let mut data = input;
    context.execute(&mut data, out)?;
    writeln!(out, "Result: [{}]", data.iter().join(", "))?;

    context.set_strategy(Box::new(QuickSort));
    let mut data = input;
    context.execute(&mut data, out)?;
    writeln!(out, "Result: [{}]", data.iter().join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    fn check(strategy: &dyn SortingStrategy) {
        let cases: [&[i32]; 6] = [
            &[],
            &[1],
            &[2, 1],
            &[3, 3, 1, 3],
            &[9, 8, 7, 6, 5, 4, 3, 2, 1],
            &[-4, 10, 0, -4, 7, 2],
        ];
        for case in cases {
            let mut actual = case.to_vec();
            strategy.sort(&mut actual);
            let mut expected = case.to_vec();
            expected.sort();
            assert_eq!(actual, expected, "{} on {:?}", strategy.name(), case);
        }
    }

    #[test]
    fn test_bubble_sort_sorts() {
        check(&BubbleSort);
    }

    #[test]
    fn test_quick_sort_sorts() {
        check(&QuickSort);
    }

    #[test]
    fn test_quick_sort_handles_large_sorted_and_uniform_input() {
        let mut ascending: Vec<i32> = (0..200_000).collect();
        QuickSort.sort(&mut ascending);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let mut descending: Vec<i32> = (0..200_000).rev().collect();
        QuickSort.sort(&mut descending);
        assert_eq!(descending.first(), Some(&0));
        assert_eq!(descending.last(), Some(&199_999));

        let mut uniform = vec![7; 200_000];
        QuickSort.sort(&mut uniform);
        assert!(uniform.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "sorting by bubble sort\n\
             Result: [1, 2, 5, 7, 9]\n\
             sorting by quick sort\n\
             Result: [1, 2, 5, 7, 9]\n"
        );
    }
}
