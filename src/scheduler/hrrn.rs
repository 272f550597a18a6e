use crate::process::{Process, ProcessIndex};

use super::util::{push_arrivals, response_ratio};

/// Highest Response Ratio Next: no expropiativo, re-rankea por response
/// ratio sólo cuando el proceso que corría se completa.
pub struct HighestResponseRatioNext {
    /// Lista de listos; el que corre está en la posición 0.
    ready: Vec<ProcessIndex>,
}

impl HighestResponseRatioNext {
    pub fn new() -> Self {
        Self { ready: Vec::new() }
    }

    /// Decide qué proceso corre en `cur_time`.
    ///
    /// Entre completaciones devuelve siempre el mismo índice; recién
    /// cuando el de la posición 0 termina se recalculan los ratios de los
    /// que quedan y el máximo pasa al frente.
    pub fn select(&mut self, cur_time: u32, table: &[Process]) -> Option<ProcessIndex> {
        // llegadas de este tick, en orden de tabla
        push_arrivals(cur_time, table, &mut self.ready);

        // mismo cuidado que en RR/SRT: con la lista vacía no hay frente
        // que revisar
        if let Some(&head) = self.ready.first() {
            if table[head].is_done {
                self.ready.remove(0);

                // el procesador quedó libre: acá (y sólo acá) se recalcula
                // el response ratio de cada candidato con el tiempo actual
                if !self.ready.is_empty() {
                    let mut best_pos = 0;
                    let mut best_ratio = response_ratio(&table[self.ready[0]], cur_time);

                    for pos in 1..self.ready.len() {
                        let ratio = response_ratio(&table[self.ready[pos]], cur_time);
                        if ratio > best_ratio {
                            best_ratio = ratio;
                            best_pos = pos;
                        } else if ratio == best_ratio && self.ready[pos] < self.ready[best_pos] {
                            // empate de ratio → gana el de menor índice de tabla
                            best_pos = pos;
                        }
                    }

                    self.ready.swap(0, best_pos);
                }
            }
        }

        self.ready.first().copied()
    }
}

impl Default for HighestResponseRatioNext {
    fn default() -> Self {
        Self::new()
    }
}
