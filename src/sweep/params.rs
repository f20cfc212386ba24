use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::sweep::name::JobName;
use crate::sweep::Job;

/// Raw comma-separated values for each of the seven sweep axes, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ParameterLists {
    pub h: String,
    pub j: String,
    pub t: String,
    pub sigma: String,
    pub mc_steps: String,
    pub dim: String,
    pub depth: String,
}

/// One combination of sweep axes. Field order matches the nesting order of the sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterTuple {
    pub h: String,
    pub j: String,
    pub t: String,
    pub sigma: String,
    pub mc_steps: String,
    pub dim: String,
    pub depth: String,
}

impl ParameterTuple {
    fn from_values(values: [&str; 7]) -> ParameterTuple {
        let [h, j, t, sigma, mc_steps, dim, depth] = values.map(str::to_string);
        ParameterTuple { h, j, t, sigma, mc_steps, dim, depth }
    }
}

impl ParameterLists {
    /// Build the full Cartesian product of the seven lists
    ///
    /// h is the outermost axis and depth the innermost, so the last axis varies fastest.
    /// An empty list splits into a single empty token and still takes part in the product.
    pub fn expand(&self) -> Result<Vec<Job>> {
        let axes = self.axes();
        let total: usize = axes.iter().map(Vec::len).product();
        info!("Expanding sweep into {total} jobs");

        let mut jobs = Vec::with_capacity(total);
        for index in 0..total {
            let mut remainder = index;
            let mut values = [""; 7];
            for (axis, slot) in axes.iter().zip(values.iter_mut()).rev() {
                *slot = axis[remainder % axis.len()];
                remainder /= axis.len();
            }
            let params = ParameterTuple::from_values(values);
            let name = JobName::derive(&params)?;
            jobs.push(Job { name, params });
        }

        Ok(jobs)
    }

    fn axes(&self) -> [Vec<&str>; 7] {
        let lists = [
            ("hList", &self.h),
            ("jList", &self.j),
            ("tList", &self.t),
            ("sigList", &self.sigma),
            ("mcStepsList", &self.mc_steps),
            ("dimList", &self.dim),
            ("depthList", &self.depth),
        ];
        lists.map(|(option, list)| {
            if list.is_empty() {
                warn!("--{option} is empty, sweeping over a single empty value");
            }
            list.split(',').collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(h: &str, depth: &str) -> ParameterLists {
        ParameterLists {
            h: h.to_string(),
            j: "2".to_string(),
            t: "0.1,0.2".to_string(),
            sigma: "3".to_string(),
            mc_steps: "1000".to_string(),
            dim: "2".to_string(),
            depth: depth.to_string(),
        }
    }

    #[test]
    fn product_size_is_product_of_list_lengths() {
        let jobs = lists("1,2,3", "4,5").expand().unwrap();
        assert_eq!(jobs.len(), 3 * 2 * 2);
    }

    #[test]
    fn h_is_outermost_and_depth_innermost() {
        let jobs = lists("1,2", "4,5").expand().unwrap();
        let order: Vec<(&str, &str, &str)> = jobs
            .iter()
            .map(|job| (job.params.h.as_str(), job.params.t.as_str(), job.params.depth.as_str()))
            .collect();
        assert_eq!(order, vec![
            ("1", "0.1", "4"), ("1", "0.1", "5"),
            ("1", "0.2", "4"), ("1", "0.2", "5"),
            ("2", "0.1", "4"), ("2", "0.1", "5"),
            ("2", "0.2", "4"), ("2", "0.2", "5"),
        ]);
    }

    #[test]
    fn expansion_is_deterministic() {
        let sweep = lists("1,2", "4,5,6");
        assert_eq!(sweep.expand().unwrap(), sweep.expand().unwrap());
    }

    #[test]
    fn empty_list_is_a_single_empty_token() {
        let sweep = ParameterLists { h: "1,2".to_string(), ..Default::default() };
        let jobs = sweep.expand().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].params.depth, "");
        assert_eq!(jobs[1].name.as_str(), "dim_h2_j_t_s_m_dep");
    }

    #[test]
    fn duplicate_tokens_are_not_collapsed() {
        let jobs = lists("1,1", "4").expand().unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0], jobs[2]);
    }
}
