//! Small combinatorial helpers shared by geometry and lattice construction.

/// All k-subsets of `0..n` in lexicographic order.
pub(crate) fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn rec(n: usize, k: usize, start: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            cur.push(i);
            rec(n, k, i + 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut cur = Vec::new();
    rec(n, k, 0, &mut cur, &mut out);
    out
}

/// All permutations of `0..4` with their parity (`true` = even), in a fixed
/// deterministic order.
pub(crate) fn permutations4() -> Vec<([usize; 4], bool)> {
    let mut out = Vec::with_capacity(24);
    let mut items = [0usize, 1, 2, 3];
    heap(&mut items, 4, &mut out);
    return out;

    fn heap(items: &mut [usize; 4], k: usize, out: &mut Vec<([usize; 4], bool)>) {
        if k == 1 {
            out.push((*items, parity(items)));
            return;
        }
        for i in 0..k {
            heap(items, k - 1, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
    }

    fn parity(p: &[usize; 4]) -> bool {
        let mut inversions = 0;
        for i in 0..4 {
            for j in i + 1..4 {
                if p[i] > p[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }
}
