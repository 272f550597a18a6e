use std::collections::VecDeque;

use crate::process::{Process, ProcessIndex};

use super::util::push_arrivals;

/// Round Robin: cola FIFO de listos + quantum.
///
/// El estado vive en la instancia (no en estáticos), así cada corrida de
/// simulación usa su propio `RoundRobin` sin contaminarse entre corridas.
pub struct RoundRobin {
    /// Cola de procesos listos, en orden de llegada/rotación.
    ready: VecDeque<ProcessIndex>,
    /// Ticks que le quedan al proceso del frente antes de la rotación
    /// obligatoria.
    time_to_next_sched: u32,
}

impl RoundRobin {
    /// Crea la cola vacía. El contador arranca en `quantum`, como si el
    /// primer proceso ya tuviera su tajada completa por delante.
    ///
    /// `quantum` debe ser el mismo valor que después se pasa a `select`.
    pub fn new(quantum: u32) -> Self {
        Self {
            ready: VecDeque::new(),
            time_to_next_sched: quantum,
        }
    }

    /// Decide qué proceso ocupa el procesador en el tick `cur_time`.
    /// `None` significa procesador ocioso.
    pub fn select(
        &mut self,
        cur_time: u32,
        table: &[Process],
        quantum: u32,
    ) -> Option<ProcessIndex> {
        // 1) llegadas de este tick, al final de la cola (orden de tabla)
        push_arrivals(cur_time, table, &mut self.ready);

        // 2) revisar el frente de la cola: ¿se venció el quantum o el
        //    proceso ya terminó? Ojo: la cola puede estar vacía si todavía
        //    no llegó nadie; en ese caso no hay nada que sacar.
        if let Some(&head) = self.ready.front() {
            if self.time_to_next_sched == 0 || table[head].is_done {
                // el del frente deja el procesador; si no terminó, vuelve
                // al final de la cola (rotación round-robin)
                if !table[head].is_done {
                    self.ready.push_back(head);
                }
                self.ready.pop_front();
                self.time_to_next_sched = quantum;
            }
        }

        // 3) si hay procesos listos, corre el del frente y se le descuenta
        //    un tick de su tajada
        if let Some(&head) = self.ready.front() {
            self.time_to_next_sched -= 1;
            Some(head)
        } else {
            // 4) cola vacía: dejamos el contador en cero para volver a
            //    evaluar apenas llegue alguien
            self.time_to_next_sched = 0;
            None
        }
    }
}
