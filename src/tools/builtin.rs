//! Builtin catalog and loadout definitions.
//!
//! This is the process-wide, immutable configuration data: every tool the
//! gateway knows about, its input schema, documentation variants, security
//! classification, and the named loadouts that curate subsets of it.

use crate::tools::access::AccessLevel::{LocalOnly, RemoteSafe};
use crate::tools::access::CapabilityFeature::{
    AutoContextEnrichment, CodeExecution, DatabaseRead, DatabaseWrite, ExternalBroadcast,
    FilesystemAccess,
};
use crate::tools::catalog::{ParamType, ToolCatalog, ToolDescriptor};
use crate::tools::docs::VerbosityLevel::{Admin, Basic, Full, Minimal};
use crate::tools::loadouts::Loadout;
use crate::types::Result;

/// Build the full builtin catalog.
pub fn builtin_catalog() -> Result<ToolCatalog> {
    let mut catalog = ToolCatalog::new();
    register_todo_tools(&mut catalog)?;
    register_lesson_tools(&mut catalog)?;
    register_admin_tools(&mut catalog)?;
    register_session_tools(&mut catalog)?;
    Ok(catalog)
}

fn register_todo_tools(catalog: &mut ToolCatalog) -> Result<()> {
    catalog.register(
        ToolDescriptor::new("add_todo", "Create a new todo item", RemoteSafe)
            .param("description", ParamType::String, "Task description", true)
            .param("project", ParamType::String, "Project name", true)
            .param("priority", ParamType::String, "Priority level (Critical|High|Medium|Low)", false)
            .param("target_agent", ParamType::String, "Agent the task is for", false)
            .param("metadata", ParamType::Object, "Structured metadata", false)
            .feature(AutoContextEnrichment)
            .feature(DatabaseWrite)
            .doc(Minimal, "Create task")
            .doc(Basic, "Creates a task in the specified project with the given priority and target agent. Returns a compact representation of the created todo with an ID for reference.")
            .doc(Admin, "Creates a task in the specified project. Supports standardized metadata schema including files[], tags[], phase, complexity, and acceptance_criteria. Returns todo with project counts.")
            .doc(Full, "Creates a task in the specified project with the given priority and target agent.\n\n\
                Supports the standardized metadata schema with fields for:\n\
                - Technical context: files[], components[], commit_hash, branch\n\
                - Project organization: phase, epic, tags[]\n\
                - State tracking: current_state, target_state, blockers[]\n\
                - Deliverables: deliverables[], acceptance_criteria[]\n\
                - Analysis: complexity (Low|Medium|High|Complex), confidence (1-5)\n\n\
                Returns a compact representation with the created todo ID and current project statistics.\n\
                Metadata is validated against the TodoMetadata schema for consistency.")
            .hint(Basic, "Required: description, project. Optional: priority (Critical|High|Medium|Low), target_agent, metadata")
            .hint(Admin, "Metadata supports: files[], tags[], phase, complexity, confidence(1-5), acceptance_criteria[]")
            .hint(Full, "Parameters:\n\
                - description (str, required): Task description (max 500 chars)\n\
                - project (str, required): Project name from valid projects list\n\
                - priority (str, optional): Critical|High|Medium|Low (default: Medium)\n\
                - target_agent (str, optional): user|claude|system (default: user)\n\
                - metadata (dict, optional): Structured metadata following TodoMetadata schema\n\
                  - files: [\"path/to/file.py\"] - Related files\n\
                  - tags: [\"bug\", \"feature\"] - Categorization tags\n\
                  - phase: \"implementation\" - Project phase\n\
                  - complexity: Low|Medium|High|Complex - Complexity assessment\n\
                  - confidence: 1-5 - Confidence level\n\
                  - acceptance_criteria: [\"criterion1\", \"criterion2\"] - Completion criteria"),
    )?;

    catalog.register(
        ToolDescriptor::new("query_todos", "Query todos with filters", RemoteSafe)
            .param("filter", ParamType::Object, "MongoDB-style query filter", false)
            .param("projection", ParamType::Object, "Fields to include or exclude", false)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "Search todos")
            .doc(Basic, "Query todos with flexible filtering options. Searches the todo database using MongoDB-style query filters and projections.")
            .doc(Admin, "Query todos with MongoDB-style filters and projections. Supports filtering by status, project, priority, metadata fields, and date ranges. Results include user-scoped data.")
            .doc(Full, "Query todos with flexible filtering options from user's database.\n\n\
                Supports MongoDB-style query syntax with filters like:\n\
                - {\"status\": \"pending\"} - Filter by status\n\
                - {\"project\": \"inventorium\"} - Filter by project\n\
                - {\"metadata.tags\": {\"$in\": [\"bug\", \"feature\"]}} - Filter by metadata tags\n\
                - {\"priority\": {\"$in\": [\"High\", \"Critical\"]}} - Filter by priority\n\
                - {\"created_at\": {\"$gte\": timestamp}} - Date range filters\n\n\
                Projection parameter allows selecting specific fields to return.\n\
                All queries are user-scoped for data isolation.")
            .hint(Basic, "filter (dict): MongoDB query, projection (dict): fields to return, limit (int): max results")
            .hint(Admin, "Supports nested metadata queries: {'metadata.tags': {'$in': ['bug']}}, user-scoped results")
            .hint(Full, "Parameters:\n\
                - filter (dict, optional): MongoDB-style query filter\n\
                  Examples: {\"status\": \"pending\"}, {\"metadata.tags\": {\"$in\": [\"bug\"]}}\n\
                - projection (dict, optional): Fields to include/exclude\n\
                  Examples: {\"description\": 1, \"status\": 1}, {\"metadata\": 0}\n\
                - limit (int, optional): Maximum number of results (default: 100)"),
    )?;

    catalog.register(
        ToolDescriptor::new("update_todo", "Update an existing todo", RemoteSafe)
            .param("todo_id", ParamType::String, "Todo ID", true)
            .param("updates", ParamType::Object, "Fields to change", true)
            .feature(DatabaseWrite)
            .doc(Minimal, "Update todo")
            .doc(Basic, "Update a todo with the provided changes. Common fields to update: description, priority, status, metadata.")
            .doc(Admin, "Update a todo with the provided changes. Supports updating all core fields and metadata. Validates metadata schema. Tracks changes in audit logs.")
            .doc(Full, "Update a todo with the provided changes.\n\n\
                Supports updating any field:\n\
                - Core fields: description, priority, status, target_agent, project\n\
                - Metadata fields: any field in the TodoMetadata schema\n\
                - Completion fields: completed_by, completion_comment\n\n\
                Metadata updates are validated against the schema. All changes are logged\n\
                for audit purposes. The updated_at timestamp is automatically set."),
    )?;

    catalog.register(
        ToolDescriptor::new("delete_todo", "Delete a todo by ID", RemoteSafe)
            .param("todo_id", ParamType::String, "Todo ID", true)
            .feature(DatabaseWrite)
            .doc(Minimal, "Delete todo")
            .doc(Basic, "Delete a todo by its ID.")
            .doc(Admin, "Delete a todo by its ID from user's database. Logs deletion event for audit trail.")
            .doc(Full, "Delete a todo item by its ID. The deletion is logged for audit purposes and the todo is permanently removed from the user's database."),
    )?;

    catalog.register(
        ToolDescriptor::new("get_todo", "Get a specific todo by ID", RemoteSafe)
            .param("todo_id", ParamType::String, "Todo ID", true)
            .feature(AutoContextEnrichment)
            .feature(DatabaseRead)
            .doc(Minimal, "Get todo by ID")
            .doc(Basic, "Get a specific todo by ID.")
            .doc(Admin, "Get a specific todo by ID from user's database. Returns full todo object including metadata and completion details.")
            .doc(Full, "Get a specific todo by ID. Returns the complete todo object including all metadata fields, completion tracking, and audit information."),
    )?;

    catalog.register(
        ToolDescriptor::new("mark_todo_complete", "Mark a todo as completed", RemoteSafe)
            .param("todo_id", ParamType::String, "Todo ID", true)
            .param("comment", ParamType::String, "Completion comment", false)
            .feature(AutoContextEnrichment)
            .feature(DatabaseWrite)
            .doc(Minimal, "Complete todo")
            .doc(Basic, "Mark a todo as completed. Calculates the duration from creation to completion.")
            .doc(Admin, "Mark a todo as completed. Calculates duration, updates status, adds completion timestamp. Optional completion comment is stored in metadata.")
            .doc(Full, "Mark a todo as completed with optional completion comment.\n\n\
                Automatically:\n\
                - Sets status to \"completed\"\n\
                - Records completion timestamp\n\
                - Calculates duration from creation to completion\n\
                - Updates completed_by field with user information\n\
                - Stores completion comment in metadata if provided\n\
                - Logs completion event for audit trail"),
    )?;

    catalog.register(
        ToolDescriptor::new("list_todos_by_status", "List todos filtered by status", RemoteSafe)
            .param("status", ParamType::String, "Status value to filter on", true)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "List by status")
            .doc(Basic, "List todos filtered by status ('initial', 'pending', 'completed'). Results are formatted for efficiency with truncated descriptions.")
            .doc(Admin, "List todos filtered by status from user's database. Status options: pending, completed, initial, blocked, in_progress. Results include metadata summary.")
            .doc(Full, "List todos filtered by their status. Valid status values: pending, completed, initial, blocked, in_progress. Results are formatted for efficiency with truncated descriptions to reduce token usage while preserving essential information."),
    )?;

    catalog.register(
        ToolDescriptor::new("search_todos", "Text search across todos", RemoteSafe)
            .param("query", ParamType::String, "Search text or project:Name form", true)
            .param("fields", ParamType::Array, "Fields to search", false)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "Search todos")
            .doc(Basic, "Search todos with text search capabilities across specified fields. Special format: \"project:ProjectName\" to search by project.")
            .doc(Admin, "Search todos with regex text search across configurable fields (description, project, metadata). Supports project-specific searches.")
            .doc(Full, "Search todos with text search capabilities across specified fields.\n\n\
                Default search fields: description, project\n\
                Custom fields can be specified in the fields parameter.\n\
                Supports regex patterns and case-insensitive search.\n\n\
                Special formats:\n\
                - \"project:ProjectName\" - Search by specific project\n\
                - Regular text searches across description and metadata fields"),
    )?;

    catalog.register(
        ToolDescriptor::new("list_project_todos", "List recent active todos for a project", RemoteSafe)
            .param("project", ParamType::String, "Project name", true)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "List project todos")
            .doc(Basic, "List recent active todos for a specific project.")
            .doc(Admin, "List recent active (pending) todos for a specific project from user's database. Useful for project status overview.")
            .doc(Full, "List recent active todos for a specific project. Only returns pending todos to focus on current work. Useful for getting a quick overview of project status and active tasks."),
    )?;

    Ok(())
}

fn register_lesson_tools(catalog: &mut ToolCatalog) -> Result<()> {
    catalog.register(
        ToolDescriptor::new("add_lesson", "Add a lesson to the knowledge base", RemoteSafe)
            .param("language", ParamType::String, "Language or technology", true)
            .param("topic", ParamType::String, "Lesson topic", true)
            .param("lesson_learned", ParamType::String, "Lesson content", true)
            .param("tags", ParamType::Array, "Categorization tags", false)
            .feature(DatabaseWrite)
            .doc(Minimal, "Add lesson")
            .doc(Basic, "Add a new lesson learned to the knowledge base.")
            .doc(Admin, "Add a new lesson with language, topic, and tags. Invalidates lesson tag cache automatically.")
            .doc(Full, "Add a new lesson learned to the knowledge base with specified language, topic, content, and optional tags. The lesson is assigned a unique ID and timestamp."),
    )?;

    catalog.register(
        ToolDescriptor::new("get_lesson", "Get a lesson by ID", RemoteSafe)
            .param("lesson_id", ParamType::String, "Lesson ID", true)
            .feature(DatabaseRead)
            .doc(Minimal, "Get lesson")
            .doc(Basic, "Get a specific lesson by ID.")
            .doc(Admin, "Get a specific lesson by ID from user's knowledge base.")
            .doc(Full, "Retrieve a specific lesson by its unique ID from the user's knowledge base."),
    )?;

    catalog.register(
        ToolDescriptor::new("update_lesson", "Update an existing lesson", RemoteSafe)
            .param("lesson_id", ParamType::String, "Lesson ID", true)
            .param("updates", ParamType::Object, "Fields to change", true)
            .feature(DatabaseWrite)
            .doc(Minimal, "Update lesson")
            .doc(Basic, "Update an existing lesson by ID.")
            .doc(Admin, "Update an existing lesson by ID. Supports updating all lesson fields. Invalidates tag cache if tags modified.")
            .doc(Full, "Update an existing lesson by its ID. Can modify any field including language, topic, lesson_learned content, and tags. Tag cache is automatically invalidated if tags are changed."),
    )?;

    catalog.register(
        ToolDescriptor::new("delete_lesson", "Delete a lesson by ID", RemoteSafe)
            .param("lesson_id", ParamType::String, "Lesson ID", true)
            .feature(DatabaseWrite)
            .doc(Minimal, "Delete lesson")
            .doc(Basic, "Delete a lesson by ID.")
            .doc(Admin, "Delete a lesson by ID from user's knowledge base. Invalidates lesson tag cache.")
            .doc(Full, "Delete a lesson by its ID from the knowledge base. The lesson tag cache is automatically invalidated after deletion."),
    )?;

    catalog.register(
        ToolDescriptor::new("search_lessons", "Text search across lessons", RemoteSafe)
            .param("query", ParamType::String, "Search text", true)
            .param("fields", ParamType::Array, "Fields to search", false)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .param("brief", ParamType::Boolean, "Return compact results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "Search lessons")
            .doc(Basic, "Search lessons with text search capabilities.")
            .doc(Admin, "Search lessons with regex text search across configurable fields (topic, lesson_learned, tags).")
            .doc(Full, "Search lessons with text search capabilities across specified fields. Default search fields are topic, lesson_learned, and tags. Supports regex patterns and case-insensitive search."),
    )?;

    catalog.register(
        ToolDescriptor::new("grep_lessons", "Grep-style lesson search", RemoteSafe)
            .param("pattern", ParamType::String, "Regex pattern", true)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "Grep lessons")
            .doc(Basic, "Search lessons with grep-style pattern matching across topic and content.")
            .doc(Admin, "Search lessons with grep-style regex pattern matching across topic and lesson_learned fields.")
            .doc(Full, "Search lessons using grep-style pattern matching with regex support. Searches across both topic and lesson_learned fields with case-insensitive matching."),
    )?;

    catalog.register(
        ToolDescriptor::new("list_lessons", "List all lessons", RemoteSafe)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .param("brief", ParamType::Boolean, "Return compact results", false)
            .feature(DatabaseRead)
            .doc(Minimal, "List lessons")
            .doc(Basic, "List all lessons, sorted by creation date.")
            .doc(Admin, "List all lessons from user's knowledge base, sorted by creation date (newest first).")
            .doc(Full, "List all lessons from the knowledge base, sorted by creation date in descending order (newest first). Supports optional brief mode for compact results."),
    )?;

    Ok(())
}

fn register_admin_tools(catalog: &mut ToolCatalog) -> Result<()> {
    catalog.register(
        ToolDescriptor::new("query_todo_logs", "Query the todo audit logs", RemoteSafe)
            .param("filter_type", ParamType::String, "Operation type (create|update|delete|complete|all)", false)
            .param("project", ParamType::String, "Project filter", false)
            .param("page", ParamType::Integer, "Page number", false)
            .param("page_size", ParamType::Integer, "Results per page", false)
            .feature(DatabaseRead)
            .doc(Minimal, "Query logs")
            .doc(Basic, "Query todo logs with filtering options.")
            .doc(Admin, "Query todo audit logs with filtering by type (create, update, delete, complete) and project. Supports pagination.")
            .doc(Full, "Query the todo audit logs with filtering and pagination options. Filter by operation type (create, update, delete, complete) and project. Includes pagination with configurable page size."),
    )?;

    catalog.register(
        ToolDescriptor::new("list_projects", "List all valid projects", LocalOnly)
            .param("include_details", ParamType::Boolean, "Include full project metadata", false)
            .param("madness_root", ParamType::String, "Root path of the project tree", false)
            .feature(FilesystemAccess)
            .doc(Minimal, "List projects")
            .doc(Basic, "List all valid projects from the centralized project management system.")
            .doc(Admin, "List all valid projects. include_details: False (names only), True (full metadata), \"filemanager\" (for UI).")
            .doc(Full, "List all valid projects from the centralized project management system. The include_details parameter controls output format: False for names only, True for full metadata including git URLs and paths, or \"filemanager\" for UI-optimized format."),
    )?;

    catalog.register(
        ToolDescriptor::new("explain", "Explain a project or concept", RemoteSafe)
            .param("topic", ParamType::String, "Project or concept to explain", true)
            .param("brief", ParamType::Boolean, "Return a short form", false)
            .doc(Minimal, "Explain topic")
            .doc(Basic, "Provides a detailed explanation for a project or concept.")
            .doc(Admin, "Provides detailed explanation for projects or concepts. For projects, dynamically generates summary with recent activity.")
            .doc(Full, "Provides a detailed explanation for a project or concept. For projects, it dynamically generates a comprehensive summary including recent activity, status, and related information."),
    )?;

    catalog.register(
        ToolDescriptor::new("add_explanation", "Add a static explanation", RemoteSafe)
            .param("topic", ParamType::String, "Explanation topic", true)
            .param("content", ParamType::String, "Explanation content", true)
            .param("kind", ParamType::String, "Kind (concept, project, ...)", false)
            .param("author", ParamType::String, "Author name", false)
            .doc(Minimal, "Add explanation")
            .doc(Basic, "Add a new static explanation to the knowledge base.")
            .doc(Admin, "Add a new static explanation with topic, content, kind (concept/project/etc), and author.")
            .doc(Full, "Add a new static explanation to the knowledge base with specified topic, content, kind (concept, project, etc.), and author information. Uses upsert to update existing explanations."),
    )?;

    catalog.register(
        ToolDescriptor::new("point_out_obvious", "Point out something obvious", RemoteSafe)
            .param("observation", ParamType::String, "The obvious observation", true)
            .param("sarcasm_level", ParamType::Integer, "Sarcasm level 1-10", false)
            .feature(ExternalBroadcast)
            .doc(Minimal, "Point obvious")
            .doc(Basic, "Points out something obvious to the human user with humor.")
            .doc(Admin, "Points out obvious things with configurable sarcasm levels (1-10). Stores observations and publishes to the message bus.")
            .doc(Full, "Points out something obvious to the human user with varying levels of humor and sarcasm. Sarcasm level ranges from 1 (gentle) to 10 (maximum sass). Observations are logged and published to the message bus for system integration."),
    )?;

    catalog.register(
        ToolDescriptor::new("bring_your_own", "Run custom tool code", LocalOnly)
            .param("tool_name", ParamType::String, "Name for the custom tool", true)
            .param("code", ParamType::String, "Tool source code", true)
            .param("runtime", ParamType::String, "Runtime (python|javascript|bash)", false)
            .param("timeout", ParamType::Integer, "Execution timeout in seconds", false)
            .param("args", ParamType::Object, "Arguments passed to the tool", false)
            .param("persist", ParamType::Boolean, "Keep the tool registered", false)
            .feature(CodeExecution)
            .feature(FilesystemAccess)
            .doc(Minimal, "Custom tool")
            .doc(Basic, "Temporarily hijack the MCP server to run custom tool code.")
            .doc(Admin, "Execute custom tool code in Python, JavaScript, or Bash runtimes. Includes rate limiting and execution history.")
            .doc(Full, "Temporarily hijack the MCP server to run custom tool code. Supports Python, JavaScript, and Bash runtimes with configurable timeout and argument passing. Includes rate limiting for non-admin users and comprehensive execution logging. Use with caution - allows arbitrary code execution."),
    )?;

    Ok(())
}

// Session tools define Minimal/Basic/Full only; Admin falls back to Full.
fn register_session_tools(catalog: &mut ToolCatalog) -> Result<()> {
    catalog.register(
        ToolDescriptor::new("inventorium_sessions_list", "List chat sessions", RemoteSafe)
            .param("project", ParamType::String, "Project filter", false)
            .param("limit", ParamType::Integer, "Maximum number of results", false)
            .doc(Minimal, "List sessions")
            .doc(Basic, "List chat sessions, optionally filtered by project.")
            .doc(Full, "List chat sessions from the session service, optionally filtered by project, sorted by recency. Supports a result limit for pagination."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_get", "Get a session by ID", RemoteSafe)
            .param("session_id", ParamType::String, "Session ID", true)
            .doc(Minimal, "Get session")
            .doc(Basic, "Get a specific chat session by ID.")
            .doc(Full, "Retrieve a specific chat session by its ID, including title, project, status, and genealogy links."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_create", "Create a chat session", RemoteSafe)
            .param("project", ParamType::String, "Project name", true)
            .param("title", ParamType::String, "Session title", false)
            .param("initial_prompt", ParamType::String, "Seed prompt", false)
            .param("agentic_tool", ParamType::String, "Agentic tool to attach", false)
            .doc(Minimal, "Create session")
            .doc(Basic, "Create a new chat session and optionally seed it with a prompt.")
            .doc(Full, "Create a new chat session in the given project, optionally seeded with an initial prompt and bound to a specific agentic tool (default claude-code)."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_spawn", "Spawn a child session", RemoteSafe)
            .param("parent_session_id", ParamType::String, "Parent session ID", true)
            .param("prompt", ParamType::String, "Prompt for the child session", true)
            .param("todo_id", ParamType::String, "Todo to link", false)
            .param("title", ParamType::String, "Session title", false)
            .doc(Minimal, "Spawn session")
            .doc(Basic, "Spawn a child session from a parent session.")
            .doc(Full, "Spawn a child session under a parent session with a fresh prompt, optionally linking a todo. The child is recorded in the parent's genealogy."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_fork", "Fork an existing session", RemoteSafe)
            .param("session_id", ParamType::String, "Session to fork", true)
            .param("title", ParamType::String, "Title for the fork", false)
            .param("include_messages", ParamType::Boolean, "Copy message history", false)
            .param("inherit_todos", ParamType::Boolean, "Carry linked todos over", false)
            .param("initial_status", ParamType::String, "Status for the fork", false)
            .doc(Minimal, "Fork session")
            .doc(Basic, "Fork an existing session to explore alternate ideas.")
            .doc(Full, "Fork an existing session to explore alternate ideas. Message history and linked todos can be carried over, and the fork may start in a chosen status."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_genealogy", "Get session genealogy", RemoteSafe)
            .param("session_id", ParamType::String, "Session ID", true)
            .doc(Minimal, "Session genealogy")
            .doc(Basic, "Get the ancestry and descendants of a session.")
            .doc(Full, "Get the full genealogy of a session: its ancestors, spawned children, and forks, with the links that produced each relationship."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_sessions_tree", "Fetch the session tree", RemoteSafe)
            .param("project", ParamType::String, "Project filter", false)
            .param("limit", ParamType::Integer, "Maximum number of nodes", false)
            .doc(Minimal, "Session tree")
            .doc(Basic, "Fetch the full session tree for a project.")
            .doc(Full, "Fetch the full session tree for a project, rooted at top-level sessions with spawn and fork edges expanded, up to the node limit."),
    )?;

    catalog.register(
        ToolDescriptor::new("inventorium_todos_link_session", "Link a todo to a session", RemoteSafe)
            .param("todo_id", ParamType::String, "Todo ID", true)
            .param("session_id", ParamType::String, "Session ID", true)
            .doc(Minimal, "Link todo-session")
            .doc(Basic, "Link an existing todo to a chat session.")
            .doc(Full, "Link an existing todo to a chat session so that work items and the conversations that produced them stay connected."),
    )?;

    Ok(())
}

/// Build the builtin loadout set.
pub fn builtin_loadouts() -> Vec<Loadout> {
    vec![
        Loadout::new(
            "full",
            "All available tools (30 local, 28 remote after filtering)",
            &[
                // Todo management (9 tools)
                "add_todo", "query_todos", "update_todo", "delete_todo", "get_todo",
                "mark_todo_complete", "list_todos_by_status", "search_todos", "list_project_todos",
                // Lessons (7 tools)
                "add_lesson", "get_lesson", "update_lesson", "delete_lesson", "search_lessons",
                "grep_lessons", "list_lessons",
                // Admin/System (5 tools)
                "query_todo_logs", "list_projects", "explain", "add_explanation", "point_out_obvious",
                // Custom code (1 tool)
                "bring_your_own",
                // Sessions (8 tools)
                "inventorium_sessions_list", "inventorium_sessions_get",
                "inventorium_sessions_create", "inventorium_sessions_spawn",
                "inventorium_sessions_fork", "inventorium_sessions_genealogy",
                "inventorium_sessions_tree", "inventorium_todos_link_session",
            ],
        ),
        Loadout::new(
            "basic",
            "Core CRUD operations (7 tools)",
            &[
                "add_todo", "query_todos", "update_todo", "get_todo", "mark_todo_complete",
                "list_todos_by_status", "list_project_todos",
            ],
        ),
        Loadout::new(
            "minimal",
            "Absolute minimum functionality (4 tools)",
            &["add_todo", "query_todos", "get_todo", "mark_todo_complete"],
        ),
        Loadout::new(
            "lessons",
            "Knowledge management focus (7 tools)",
            &[
                "add_lesson", "get_lesson", "update_lesson", "delete_lesson", "search_lessons",
                "grep_lessons", "list_lessons",
            ],
        ),
        // The upstream description undercounts; the list is authoritative.
        Loadout::new(
            "admin",
            "Administrative tools and session management (13 tools)",
            &[
                "query_todos", "update_todo", "delete_todo", "query_todo_logs",
                "list_projects", "explain", "add_explanation",
                "inventorium_sessions_list", "inventorium_sessions_get",
                "inventorium_sessions_create", "inventorium_sessions_fork",
                "inventorium_sessions_genealogy", "inventorium_sessions_tree",
                "inventorium_todos_link_session",
            ],
        ),
        Loadout::new(
            "write_only",
            "Create, update, delete operations only (6 tools)",
            &[
                "add_todo", "update_todo", "delete_todo",
                "mark_todo_complete", "add_lesson", "update_lesson",
            ],
        ),
        Loadout::new(
            "read_only",
            "Query and get operations only (8 tools)",
            &[
                "query_todos", "get_todo", "list_todos_by_status",
                "list_project_todos", "search_todos", "get_lesson",
                "search_lessons", "list_lessons",
            ],
        ),
        Loadout::new(
            "lightweight",
            "Token-optimized core functionality (10 tools)",
            &[
                "add_todo", "query_todos", "update_todo", "get_todo",
                "mark_todo_complete", "add_lesson", "get_lesson",
                "search_lessons", "inventorium_sessions_list", "inventorium_sessions_create",
            ],
        ),
        // Legacy test loadout. Its hybrid-status tools never made it into
        // the catalog; resolution drops them.
        Loadout::new(
            "hybrid_test",
            "Testing hybrid mode functionality (6 tools)",
            &[
                "add_todo", "query_todos", "get_todo", "mark_todo_complete",
                "get_hybrid_status", "test_api_connectivity",
            ],
        ),
    ]
}
