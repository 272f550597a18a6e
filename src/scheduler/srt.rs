use crate::process::{Process, ProcessIndex};

use super::util::{push_arrivals, remaining_time};

/// Shortest Remaining Time: expropiativo, reordena la lista cada tick.
pub struct ShortestRemainingTime {
    /// Lista de listos. No es FIFO estricta: cada tick el de menor tiempo
    /// restante se intercambia a la posición 0.
    ready: Vec<ProcessIndex>,
}

impl ShortestRemainingTime {
    pub fn new() -> Self {
        Self { ready: Vec::new() }
    }

    /// Decide qué proceso corre en `cur_time`. Puede cambiar de proceso en
    /// cualquier tick si otro quedó con menos tiempo restante.
    pub fn select(&mut self, cur_time: u32, table: &[Process]) -> Option<ProcessIndex> {
        // llegadas de este tick, en orden de tabla
        push_arrivals(cur_time, table, &mut self.ready);

        // si el que venía corriendo (posición 0) terminó, sale de la lista;
        // con la lista vacía no hay nada que sacar
        if let Some(&head) = self.ready.first() {
            if table[head].is_done {
                self.ready.remove(0);
            }
        }

        if !self.ready.is_empty() {
            // buscar el de menor tiempo restante; en empate gana el de
            // menor índice de TABLA (no el de menor posición en la lista)
            let mut min_pos = 0;
            let mut min_remaining = remaining_time(&table[self.ready[0]]);

            for pos in 1..self.ready.len() {
                let rem = remaining_time(&table[self.ready[pos]]);
                if rem < min_remaining {
                    min_remaining = rem;
                    min_pos = pos;
                } else if rem == min_remaining && self.ready[pos] < self.ready[min_pos] {
                    min_pos = pos;
                }
            }

            // el elegido pasa al frente
            self.ready.swap(0, min_pos);
        }

        self.ready.first().copied()
    }
}

impl Default for ShortestRemainingTime {
    fn default() -> Self {
        Self::new()
    }
}
