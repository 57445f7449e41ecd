//! Editor form state machine.
//!
//! # Design
//! - `Editing -> Submitting -> (closed | Editing)`; closing is the store dropping the state.
//! - In add mode the id follows the name until the admin types into the id field.
//! - In edit mode the id is fixed to the record being edited.

use crate::core::error::ValidationError;
use crate::core::logic::{derive_identifier, normalize_identifier};
use crate::models::{AlgorithmRecord, Category, Difficulty, KeyType};

/// Encryption example stored when the add form leaves it blank.
pub const DEFAULT_ENCRYPTION_EXAMPLE: &str = "Ejemplo de encriptación";
/// Decryption example stored when the add form leaves it blank.
pub const DEFAULT_DECRYPTION_EXAMPLE: &str = "Ejemplo de desencriptación";
/// Key type stored when the add form leaves it blank.
pub const DEFAULT_KEY_TYPE: &str = "Por definir";

/// Whether the editor creates or updates a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    /// New record.
    Add,
    /// Existing record with this id.
    Edit {
        /// Id of the record being edited.
        id: String,
    },
}

impl EditorMode {
    /// Modal title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Add => "Agregar nuevo algoritmo",
            Self::Edit { .. } => "Editar algoritmo",
        }
    }

    /// Submit button label.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Add => "Crear algoritmo",
            Self::Edit { .. } => "Guardar cambios",
        }
    }

    /// Toast shown after the backend accepts the mutation.
    #[must_use]
    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::Add => "✅ Algoritmo creado exitosamente",
            Self::Edit { .. } => "✅ Algoritmo actualizado exitosamente",
        }
    }

    /// Toast shown when the backend rejects the mutation.
    #[must_use]
    pub fn failure_message(&self, reason: &str) -> String {
        match self {
            Self::Add => format!("Error creando algoritmo: {reason}"),
            Self::Edit { .. } => format!("❌ Error: {reason}"),
        }
    }

    /// Whether `field` must be filled before submitting.
    #[must_use]
    pub fn is_required(&self, field: FormField) -> bool {
        self.required_fields().contains(&field)
    }

    fn required_fields(&self) -> &'static [FormField] {
        match self {
            Self::Add => &[
                FormField::Name,
                FormField::Id,
                FormField::Category,
                FormField::Description,
                FormField::Difficulty,
            ],
            Self::Edit { .. } => &FormField::ALL,
        }
    }
}

/// Where the modal is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorPhase {
    /// Inputs are editable.
    #[default]
    Editing,
    /// A request is in flight.
    Submitting,
}

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Display name.
    Name,
    /// Record id.
    Id,
    /// Category label.
    Category,
    /// Description.
    Description,
    /// Encryption example.
    EncryptionExample,
    /// Decryption example.
    DecryptionExample,
    /// Key type label.
    KeyType,
    /// Difficulty label.
    Difficulty,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Id,
        Self::Category,
        Self::Description,
        Self::EncryptionExample,
        Self::DecryptionExample,
        Self::KeyType,
        Self::Difficulty,
    ];

    /// Label shown next to the input and in validation toasts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Id => "ID único",
            Self::Category => "Categoría",
            Self::Description => "Descripción",
            Self::EncryptionExample => "Ejemplo encriptar",
            Self::DecryptionExample => "Ejemplo desencriptar",
            Self::KeyType => "Tipo de clave",
            Self::Difficulty => "Dificultad",
        }
    }
}

/// Raw form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmForm {
    /// Name input.
    pub name: String,
    /// Id input.
    pub id: String,
    /// Category select.
    pub category: String,
    /// Description textarea.
    pub description: String,
    /// Encryption example input.
    pub encryption_example: String,
    /// Decryption example input.
    pub decryption_example: String,
    /// Key type select.
    pub key_type: String,
    /// Difficulty select.
    pub difficulty: String,
    /// The admin typed into the id field.
    pub id_touched: bool,
}

impl Default for AlgorithmForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            id: String::new(),
            category: Category::ClassicalCrypto.label().to_string(),
            description: String::new(),
            encryption_example: String::new(),
            decryption_example: String::new(),
            key_type: KeyType::Symmetric.label().to_string(),
            difficulty: Difficulty::Beginner.label().to_string(),
            id_touched: false,
        }
    }
}

impl AlgorithmForm {
    /// Pre-fill from an existing record.
    #[must_use]
    pub fn from_record(record: &AlgorithmRecord) -> Self {
        Self {
            name: record.name.clone(),
            id: record.id.clone(),
            category: record.category.label().to_string(),
            description: record.description.clone(),
            encryption_example: record.encryption_example.clone(),
            decryption_example: record.decryption_example.clone(),
            key_type: record.key_type.label().to_string(),
            difficulty: record.difficulty.label().to_string(),
            id_touched: true,
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Id => &self.id,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
            FormField::EncryptionExample => &self.encryption_example,
            FormField::DecryptionExample => &self.decryption_example,
            FormField::KeyType => &self.key_type,
            FormField::Difficulty => &self.difficulty,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Id => &mut self.id,
            FormField::Category => &mut self.category,
            FormField::Description => &mut self.description,
            FormField::EncryptionExample => &mut self.encryption_example,
            FormField::DecryptionExample => &mut self.decryption_example,
            FormField::KeyType => &mut self.key_type,
            FormField::Difficulty => &mut self.difficulty,
        }
    }

    /// Required fields left blank for the given mode.
    #[must_use]
    pub fn missing_fields(&self, mode: &EditorMode) -> Vec<FormField> {
        mode.required_fields()
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Validate and convert into the record sent to the API.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing every blank required field.
    pub fn to_record(&self, mode: &EditorMode) -> Result<AlgorithmRecord, ValidationError> {
        let missing = self.missing_fields(mode);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(
                missing.into_iter().map(FormField::label).collect(),
            ));
        }
        let id = match mode {
            EditorMode::Add => normalize_identifier(&self.id),
            EditorMode::Edit { id } => id.clone(),
        };
        Ok(AlgorithmRecord {
            id,
            name: self.name.trim().to_string(),
            category: Category::from_label(self.category.trim()),
            description: self.description.trim().to_string(),
            encryption_example: or_default(&self.encryption_example, DEFAULT_ENCRYPTION_EXAMPLE),
            decryption_example: or_default(&self.decryption_example, DEFAULT_DECRYPTION_EXAMPLE),
            key_type: KeyType::from_label(&or_default(&self.key_type, DEFAULT_KEY_TYPE)),
            difficulty: Difficulty::from_label(self.difficulty.trim()),
        })
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Open editor modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    /// Add or edit.
    pub mode: EditorMode,
    /// Lifecycle phase.
    pub phase: EditorPhase,
    /// Current inputs.
    pub form: AlgorithmForm,
}

impl EditorState {
    /// Blank add form.
    #[must_use]
    pub fn add() -> Self {
        Self {
            mode: EditorMode::Add,
            phase: EditorPhase::Editing,
            form: AlgorithmForm::default(),
        }
    }

    /// Edit form pre-filled from `record`.
    #[must_use]
    pub fn edit(record: &AlgorithmRecord) -> Self {
        Self {
            mode: EditorMode::Edit {
                id: record.id.clone(),
            },
            phase: EditorPhase::Editing,
            form: AlgorithmForm::from_record(record),
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == EditorPhase::Submitting
    }

    /// Whether the id input accepts typing.
    #[must_use]
    pub const fn id_editable(&self) -> bool {
        matches!(self.mode, EditorMode::Add)
    }

    /// Apply one input change.
    pub fn set_field(&mut self, field: FormField, value: String) {
        if self.is_submitting() {
            return;
        }
        match field {
            FormField::Id => {
                if !self.id_editable() {
                    return;
                }
                self.form.id_touched = !value.is_empty();
                self.form.id = value;
            }
            FormField::Name => {
                if self.id_editable() && !self.form.id_touched {
                    self.form.id = derive_identifier(&value);
                }
                self.form.name = value;
            }
            other => *self.form.slot(other) = value,
        }
    }
}

/// Validated mutation ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSubmission {
    /// Create or update.
    pub mode: EditorMode,
    /// Record body.
    pub record: AlgorithmRecord,
}

/// Open delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    /// Id of the record to delete.
    pub id: String,
    /// Name shown in the prompt.
    pub name: String,
    /// Lifecycle phase.
    pub phase: EditorPhase,
}

impl DeleteConfirmation {
    /// Prompt text.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "¿Estás seguro de que quieres ELIMINAR permanentemente el algoritmo \"{}\"? Esta acción no se puede deshacer.",
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::state::tests::record;

    #[test]
    fn name_drives_id_until_id_is_touched() {
        let mut editor = EditorState::add();
        editor.set_field(FormField::Name, "AES Encryption!!".to_string());
        assert_eq!(editor.form.id, "aes-encryption");

        editor.set_field(FormField::Id, "aes".to_string());
        editor.set_field(FormField::Name, "AES 256".to_string());
        assert_eq!(editor.form.id, "aes");

        editor.set_field(FormField::Id, String::new());
        editor.set_field(FormField::Name, "AES 256".to_string());
        assert_eq!(editor.form.id, "aes-256");
    }

    #[test]
    fn edit_mode_keeps_id_read_only() {
        let mut editor = EditorState::edit(&record("cesar", "César"));
        editor.set_field(FormField::Id, "otro".to_string());
        editor.set_field(FormField::Name, "Cifrado César".to_string());
        assert_eq!(editor.form.id, "cesar");
        assert_eq!(editor.form.name, "Cifrado César");
    }

    #[test]
    fn add_form_applies_defaults() {
        let mut editor = EditorState::add();
        editor.set_field(FormField::Name, "ROT13".to_string());
        editor.set_field(FormField::Id, "ROT 13".to_string());
        editor.set_field(FormField::Category, "Codificación".to_string());
        editor.set_field(FormField::Description, "d".to_string());
        editor.set_field(FormField::KeyType, String::new());
        let record = editor.form.to_record(&editor.mode).expect("valid form");
        assert_eq!(record.id, "rot-13");
        assert_eq!(record.category, Category::Encoding);
        assert_eq!(record.encryption_example, DEFAULT_ENCRYPTION_EXAMPLE);
        assert_eq!(record.decryption_example, DEFAULT_DECRYPTION_EXAMPLE);
        assert_eq!(record.key_type, KeyType::Other(DEFAULT_KEY_TYPE.to_string()));
    }

    #[test]
    fn edit_mode_requires_every_field() {
        let mut editor = EditorState::edit(&record("cesar", "César"));
        editor.set_field(FormField::EncryptionExample, "  ".to_string());
        let err = editor.form.to_record(&editor.mode).expect_err("blank example");
        assert_eq!(err, ValidationError::MissingFields(vec!["Ejemplo encriptar"]));
    }

    #[test]
    fn submitting_freezes_inputs() {
        let mut editor = EditorState::add();
        editor.phase = EditorPhase::Submitting;
        editor.set_field(FormField::Name, "RSA".to_string());
        assert!(editor.form.name.is_empty());
    }
}
