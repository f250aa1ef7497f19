//! 最小費用流 (Primal-Dual法)
//!
//! 各反復でポテンシャル付きのDijkstra法により最短路を求め、そこに流せるだけ流す。
//! 辺の容量と費用は非負であること。

use std::{cmp::Reverse, collections::BinaryHeap};

use util::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub cap: i64,
    pub flow: i64,
    pub cost: i64,
}

#[derive(Debug, Clone)]
struct InnerEdge {
    to: usize,
    /// `g[to]`における逆辺の位置
    rev: usize,
    cap: i64,
    cost: i64,
}

#[derive(Debug, Clone)]
pub struct MinCostFlowGraph {
    /// 追加された順に、辺の`(from, g[from]での位置)`
    pos: Vec<(usize, usize)>,
    g: Vec<Vec<InnerEdge>>,
}

impl MinCostFlowGraph {
    pub fn new(n: usize) -> Self {
        log::trace!("building min-cost-flow graph: vertices = {n}");
        Self {
            pos: vec![],
            g: (0..n).map(|_| vec![]).collect(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.g.len()
    }

    pub fn num_edges(&self) -> usize {
        self.pos.len()
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.num_vertices() {
            Ok(())
        } else {
            Err(Error::invalid_argument(format_args!(
                "vertex {v} out of range for graph with {} vertices",
                self.num_vertices()
            )))
        }
    }

    /// 辺を追加し、その番号を返す。
    pub fn add_edge(&mut self, from: usize, to: usize, cap: i64, cost: i64) -> Result<usize> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if cap < 0 || cost < 0 {
            return Err(Error::invalid_argument(format_args!(
                "capacity and cost must be non-negative, got cap = {cap}, cost = {cost}"
            )));
        }
        let id = self.pos.len();
        self.pos.push((from, self.g[from].len()));
        let rev = self.g[to].len() + usize::from(from == to);
        self.g[from].push(InnerEdge { to, rev, cap, cost });
        let rev = self.g[from].len() - 1;
        self.g[to].push(InnerEdge {
            to: from,
            rev,
            cap: 0,
            cost: -cost,
        });
        Ok(id)
    }

    pub fn get_edge(&self, id: usize) -> Result<FlowEdge> {
        let &(from, idx) = self.pos.get(id).ok_or(Error::IndexOutOfRange {
            index: id,
            len: self.pos.len(),
        })?;
        let e = &self.g[from][idx];
        let re = &self.g[e.to][e.rev];
        Ok(FlowEdge {
            from,
            to: e.to,
            cap: e.cap + re.cap,
            flow: re.cap,
            cost: e.cost,
        })
    }

    /// 追加された順にすべての辺を返す。
    pub fn edges(&self) -> Vec<FlowEdge> {
        self.pos
            .iter()
            .map(|&(from, idx)| {
                let e = &self.g[from][idx];
                let re = &self.g[e.to][e.rev];
                FlowEdge {
                    from,
                    to: e.to,
                    cap: e.cap + re.cap,
                    flow: re.cap,
                    cost: e.cost,
                }
            })
            .collect()
    }

    /// `s`から`t`へ流せるだけ流し、`(流量, 費用)`を返す。
    pub fn flow(&mut self, s: usize, t: usize) -> Result<(i64, i64)> {
        self.flow_with_limit(s, t, i64::MAX)
    }

    pub fn flow_with_limit(&mut self, s: usize, t: usize, flow_limit: i64) -> Result<(i64, i64)> {
        Ok(self
            .slope_with_limit(s, t, flow_limit)?
            .last()
            .copied()
            .unwrap_or((0, 0)))
    }

    /// 流量に対する最小費用の折れ線を、`(0, 0)`から始まる頂点列で返す。
    ///
    /// 同一直線上の点はまとめられる。
    pub fn slope(&mut self, s: usize, t: usize) -> Result<Vec<(i64, i64)>> {
        self.slope_with_limit(s, t, i64::MAX)
    }

    pub fn slope_with_limit(
        &mut self,
        s: usize,
        t: usize,
        flow_limit: i64,
    ) -> Result<Vec<(i64, i64)>> {
        self.check_vertex(s)?;
        self.check_vertex(t)?;
        if s == t {
            return Err(Error::invalid_argument(format_args!(
                "source and sink must differ, both are {s}"
            )));
        }
        if flow_limit < 0 {
            return Err(Error::invalid_argument(format_args!(
                "flow limit must be non-negative, got {flow_limit}"
            )));
        }
        let n = self.num_vertices();
        let mut dual = vec![0; n];
        let mut dist = vec![0; n];
        let mut prev_e = vec![(0, 0); n];
        let mut vis = vec![false; n];
        let (mut flow, mut cost) = (0, 0);
        let mut prev_cost_per_flow = -1;
        let mut result = vec![(0, 0)];
        while flow < flow_limit {
            if !self.refine_dual(s, t, &mut dual, &mut dist, &mut prev_e, &mut vis) {
                break;
            }
            let mut c = flow_limit - flow;
            let mut v = t;
            while v != s {
                let (pv, pe) = prev_e[v];
                c = c.min(self.g[pv][pe].cap);
                v = pv;
            }
            let mut v = t;
            while v != s {
                let (pv, pe) = prev_e[v];
                self.g[pv][pe].cap -= c;
                let rev = self.g[pv][pe].rev;
                self.g[v][rev].cap += c;
                v = pv;
            }
            let d = -dual[s];
            flow += c;
            cost += c * d;
            log::debug!("augment: +{c} at cost {d} per unit, total = ({flow}, {cost})");
            if prev_cost_per_flow == d {
                result.pop();
            }
            result.push((flow, cost));
            prev_cost_per_flow = d;
        }
        Ok(result)
    }

    /// 縮約費用でDijkstra法を行い、ポテンシャルを更新する。`t`に到達できなければ`false`。
    fn refine_dual(
        &self,
        s: usize,
        t: usize,
        dual: &mut [i64],
        dist: &mut [i64],
        prev_e: &mut [(usize, usize)],
        vis: &mut [bool],
    ) -> bool {
        dist.fill(i64::MAX);
        vis.fill(false);
        let mut heap = BinaryHeap::new();
        dist[s] = 0;
        heap.push(Reverse((0, s)));
        while let Some(Reverse((_, v))) = heap.pop() {
            if vis[v] {
                continue;
            }
            vis[v] = true;
            if v == t {
                break;
            }
            for (i, e) in self.g[v].iter().enumerate() {
                if vis[e.to] || e.cap == 0 {
                    continue;
                }
                let cost = e.cost - dual[e.to] + dual[v];
                if dist[e.to] - dist[v] > cost {
                    dist[e.to] = dist[v] + cost;
                    prev_e[e.to] = (v, i);
                    heap.push(Reverse((dist[e.to], e.to)));
                }
            }
        }
        if !vis[t] {
            return false;
        }
        for v in 0..dual.len() {
            if vis[v] {
                dual[v] -= dist[t] - dist[v];
            }
        }
        true
    }
}
