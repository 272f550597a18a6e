use crate::process::{Process, ProcessIndex};

/// Shortest Process Next: no expropiativo, elige por servicio total.
pub struct ShortestProcessNext {
    /// Proceso que tiene el procesador. `None` hasta la primera elección.
    cur_running: Option<ProcessIndex>,
}

impl ShortestProcessNext {
    pub fn new() -> Self {
        Self { cur_running: None }
    }

    /// Sólo vuelve a decidir cuando no hay proceso actual o el actual ya
    /// terminó; mientras tanto devuelve siempre el mismo índice, aunque
    /// después llegue un proceso más corto (no hay expropiación).
    ///
    /// Si el actual terminó y todavía no hay candidatos, se sigue
    /// devolviendo el índice viejo (ya terminado); el driver trata un
    /// índice terminado como tick ocioso.
    pub fn select(&mut self, cur_time: u32, table: &[Process]) -> Option<ProcessIndex> {
        let needs_decision = match self.cur_running {
            None => true,
            Some(idx) => table[idx].is_done,
        };

        if needs_decision {
            // barrido completo de la tabla: el mínimo servicio total entre
            // los que ya llegaron y no terminaron; el `<` estricto hace que
            // en empate gane el de menor índice de tabla
            let mut shortest: Option<ProcessIndex> = None;
            let mut shortest_needed = u32::MAX;

            for (idx, p) in table.iter().enumerate() {
                if p.start_time <= cur_time && !p.is_done && p.total_time_needed < shortest_needed
                {
                    shortest = Some(idx);
                    shortest_needed = p.total_time_needed;
                }
            }

            if shortest.is_some() {
                self.cur_running = shortest;
            }
        }

        self.cur_running
    }
}

impl Default for ShortestProcessNext {
    fn default() -> Self {
        Self::new()
    }
}
