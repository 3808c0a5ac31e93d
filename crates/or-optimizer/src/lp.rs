//! 雙變數、單一約束的線性規劃求解
//!
//! ```text
//! max/min  c1·x1 + c2·x2
//! s.t.     a1·x1 + a2·x2 <= b
//!          x1, x2 >= 0
//! ```
//!
//! 可行域為多邊形，若最佳解有界則必落在頂點上，
//! 因此只需檢查頂點（原點與兩個軸截距）以及可行域的極射線（判斷無界）。

use serde::{Deserialize, Serialize};

/// 目標方向
///
/// 最小化以「最大化負目標」求解，回傳值仍為原目標值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSense {
    Maximize,
    Minimize,
}

/// 線性規劃問題
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// 目標函數係數
    pub objective: [f64; 2],

    /// 約束係數
    pub constraint: [f64; 2],

    /// 約束右端值
    pub bound: f64,

    /// 目標方向
    pub sense: ObjectiveSense,
}

/// 求解狀態
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LpStatus {
    /// 找到最佳解
    Optimal { x: [f64; 2], objective_value: f64 },

    /// 可行域為空
    Infeasible,

    /// 目標無界
    Unbounded,

    /// 係數含非有限值
    InvalidCoefficients,
}

impl LpStatus {
    pub fn is_optimal(&self) -> bool {
        matches!(self, LpStatus::Optimal { .. })
    }
}

impl LinearProgram {
    /// 創建最大化問題
    pub fn maximize(objective: [f64; 2], constraint: [f64; 2], bound: f64) -> Self {
        Self {
            objective,
            constraint,
            bound,
            sense: ObjectiveSense::Maximize,
        }
    }

    /// 創建最小化問題
    pub fn minimize(objective: [f64; 2], constraint: [f64; 2], bound: f64) -> Self {
        Self {
            objective,
            constraint,
            bound,
            sense: ObjectiveSense::Minimize,
        }
    }

    /// 檢查點是否可行（容許誤差 `tolerance`）
    pub fn is_feasible(&self, x: [f64; 2], tolerance: f64) -> bool {
        x[0] >= -tolerance
            && x[1] >= -tolerance
            && self.constraint[0] * x[0] + self.constraint[1] * x[1] <= self.bound + tolerance
    }

    /// 計算原目標值
    pub fn evaluate(&self, x: [f64; 2]) -> f64 {
        self.objective[0] * x[0] + self.objective[1] * x[1]
    }

    /// 求解
    pub fn solve(&self) -> LpStatus {
        let finite = self
            .objective
            .iter()
            .chain(self.constraint.iter())
            .chain(std::iter::once(&self.bound))
            .all(|v| v.is_finite());
        if !finite {
            return LpStatus::InvalidCoefficients;
        }

        // 統一轉為最大化
        let gain = match self.sense {
            ObjectiveSense::Maximize => self.objective,
            ObjectiveSense::Minimize => [-self.objective[0], -self.objective[1]],
        };
        let [a1, a2] = self.constraint;

        // 可行域非空：b >= 0（原點可行），或某係數為負（沿該軸走夠遠即可行）
        if self.bound < 0.0 && a1 >= 0.0 && a2 >= 0.0 {
            return LpStatus::Infeasible;
        }

        // 無界：任一極射線 d（d >= 0, a·d <= 0）上目標遞增
        if Self::extreme_rays(a1, a2)
            .iter()
            .any(|d| gain[0] * d[0] + gain[1] * d[1] > 0.0)
        {
            return LpStatus::Unbounded;
        }

        // 有界：比較可行頂點，平手時保留先找到者
        let mut best: Option<([f64; 2], f64)> = None;
        for vertex in self.vertices() {
            let value = gain[0] * vertex[0] + gain[1] * vertex[1];
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((vertex, value));
            }
        }

        match best {
            Some((x, _)) => LpStatus::Optimal {
                x,
                objective_value: self.evaluate(x),
            },
            None => LpStatus::Infeasible,
        }
    }

    /// 可行域頂點：原點、x1 軸截距、x2 軸截距
    fn vertices(&self) -> Vec<[f64; 2]> {
        let mut vertices = Vec::with_capacity(3);

        if self.bound >= 0.0 {
            vertices.push([0.0, 0.0]);
        }

        for axis in 0..2 {
            let coefficient = self.constraint[axis];
            if coefficient == 0.0 {
                continue;
            }
            let intercept = self.bound / coefficient;
            if intercept.is_finite() && intercept > 0.0 {
                let mut vertex = [0.0, 0.0];
                vertex[axis] = intercept;
                vertices.push(vertex);
            }
        }

        vertices
    }

    /// 遞減錐 {d >= 0, a·d <= 0} 的極射線
    fn extreme_rays(a1: f64, a2: f64) -> Vec<[f64; 2]> {
        let mut rays = Vec::with_capacity(3);

        if a1 <= 0.0 {
            rays.push([1.0, 0.0]);
        }
        if a2 <= 0.0 {
            rays.push([0.0, 1.0]);
        }
        // 係數異號時，a·d = 0 的方向
        if a1 * a2 < 0.0 {
            rays.push([a2.abs(), a1.abs()]);
        }

        rays
    }
}
