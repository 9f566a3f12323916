// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneau variables : définir / supprimer (valeurs complexes)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice complexe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1+i)^(2-i)+2^-i, sin(pi/4), log(-1)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut p = self.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=15)
                    .suffix(" déc."),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }

            ui.checkbox(&mut self.verbose, "Démarche");
        });

        ui.add_space(8.0);

        // Touches rapides + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(");
            self.bouton_insert(ui, ")", ")");

            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, op);
            }

            ui.separator();

            self.bouton_insert(ui, "i", "i");
            self.bouton_insert(ui, "π", "pi");
            self.bouton_insert(ui, "e", "e");
            self.bouton_insert(ui, "sin", "sin(");
            self.bouton_insert(ui, "cos", "cos(");
            self.bouton_insert(ui, "tan", "tan(");
            self.bouton_insert(ui, "log", "log(");

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_complexe")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, chiffre);
                    }
                    match ligne[0] {
                        "7" => self.bouton_action(
                            ui,
                            "DEL",
                            "Efface le dernier symbole",
                            Action::Backspace,
                        ),
                        "4" => self.bouton_insert(ui, ".", "."),
                        _ => self.bouton_insert(ui, "0", "0"),
                    }
                    ui.end_row();
                }
            });
    }

    /// Backspace “intelligent” : retire d’un coup les motifs utiles ("sin(", "pi", etc.).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        for pat in ["sin(", "cos(", "tan(", "log(", "pi"] {
            if self.entree.ends_with(pat) {
                let garde = self.entree.len() - pat.len();
                self.entree.truncate(garde);
                return;
            }
        }

        self.entree.pop();
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Variables")
            .default_open(false)
            .show(ui, |ui| {
                let variables = self.evaluateur.variables();
                let mut a_supprimer: Option<String> = None;

                if variables.is_empty() {
                    ui.label("aucune variable");
                } else {
                    egui::Grid::new("table_variables")
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui| {
                            for (nom, valeur) in &variables {
                                ui.monospace(nom.as_str());
                                ui.monospace(format!("{:.*}", self.precision, valeur));
                                if ui.small_button("×").on_hover_text("Supprimer").clicked() {
                                    a_supprimer = Some(nom.clone());
                                }
                                ui.end_row();
                            }
                        });
                }

                if let Some(nom) = a_supprimer {
                    self.supprimer_variable(&nom);
                }

                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.var_nom)
                            .desired_width(70.0)
                            .hint_text("nom"),
                    );
                    ui.label("=");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.var_re)
                            .desired_width(80.0)
                            .hint_text("réel"),
                    );
                    ui.label("+");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.var_im)
                            .desired_width(80.0)
                            .hint_text("imag."),
                    );
                    ui.label("i");
                    if ui.button("Définir").clicked() {
                        self.definir_variable();
                    }
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                if !self.verbose {
                    ui.label("cocher « Démarche » pour suivre les étapes");
                }
                let lignes = self.demarche.lines().count().max(2);
                Self::champ_monospace(ui, "demarche_out", &self.demarche, lignes);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat + démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match self
            .evaluateur
            .evaluate_detaille(&s, self.precision, self.verbose)
        {
            Ok((resultat, demarche)) => self.set_resultat(resultat, demarche.texte()),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
