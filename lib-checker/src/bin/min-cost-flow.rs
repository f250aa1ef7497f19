use min_cost_flow::MinCostFlowGraph;
use proconio::{fastout, input};

#[fastout]
fn main() {
    input! {
        n: usize,
        k: i64,
        a: [[i64; n]; n],
    }

    const BIG: i64 = 1_000_000_000;
    let (s, t) = (2 * n, 2 * n + 1);
    let mut g = MinCostFlowGraph::new(2 * n + 2);
    // どのマスも選ばずに流す分
    g.add_edge(s, t, n as i64 * k, BIG).unwrap();
    for i in 0..n {
        g.add_edge(s, i, k, 0).unwrap();
        g.add_edge(n + i, t, k, 0).unwrap();
    }
    for (i, row) in a.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            g.add_edge(i, n + j, 1, BIG - x).unwrap();
        }
    }

    let (_, cost) = g.flow_with_limit(s, t, n as i64 * k).unwrap();
    println!("{}", BIG * n as i64 * k - cost);

    let mut grid = vec![vec!['.'; n]; n];
    for e in g.edges() {
        if e.from != s && e.to != t && e.flow != 0 {
            grid[e.from][e.to - n] = 'X';
        }
    }
    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }
}
