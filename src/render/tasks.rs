//! Task breakdown (`tasks.md`) rendering.
//!
//! Seventeen fixed tasks in six phases. Only `T001` varies per feature: it
//! gets one acceptance-criteria line and one definition-of-done line per
//! entity.

use super::template::Vars;
use super::{DocumentMeta, entity_file_stem, fill};
use crate::error::Result;
use crate::feature::FeatureRecord;

const HEADER: &str = r#"# Tasks: {name}

**Feature**: {slug}
**Created**: {date}
**Status**: {status}

**Input**: Design documents from `{specs_dir}/{slug}/`
**Prerequisites**: plan.md (required), spec.md (required)

## Task Organization

Tasks are organized by implementation phase to enable systematic development and testing.

---

"#;

const SETUP_PHASE_INTRO: &str = r#"## Phase 1: Setup & Database Foundation

**Purpose**: Establish database schema and basic project structure

### T001: Create Database Entities

**Type**: Database
**Time Estimate**: 1 day
**Dependencies**: None

**Acceptance Criteria**:
"#;

const ENTITY_CRITERION: &str = "- [ ] Create {entity} TypeORM entity with all required columns\n";

const ENTITY_CRITERIA_TAIL: &str = r#"- [ ] Define relationships between entities
- [ ] Add indexes for performance optimization
- [ ] Add validation decorators
- [ ] Create database migrations

**Definition of Done**:
"#;

const ENTITY_DONE: &str =
    "- Entity file exists at `backend/src/database/entities/{file_stem}.entity.ts`\n";

const SETUP_PHASE_TAIL: &str = r#"- Migration files created in `backend/src/migrations/`
- `npm run migration:run` succeeds
- All entities properly registered in module

---

### T002: Create NestJS Module Structure

**Type**: Backend
**Time Estimate**: 0.5 days
**Dependencies**: T001

**Acceptance Criteria**:
- [ ] Module file created with all imports
- [ ] Module registered in app.module.ts
- [ ] Service and controller placeholders created
- [ ] DTOs directory structure created

**Definition of Done**:
- Module structure exists at `backend/src/[feature-slug]/`
- Application starts without errors
- Module properly imported in root module

---

"#;

const BUSINESS_LOGIC_PHASE: &str = r#"## Phase 2: Business Logic Implementation

**Purpose**: Implement core business logic and data operations

### T003: Implement Service Layer

**Type**: Backend
**Time Estimate**: 2 days
**Dependencies**: T002

**Acceptance Criteria**:
- [ ] CRUD operations implemented (create, findAll, findOne, update, delete)
- [ ] Business logic for feature-specific operations
- [ ] Input validation in service methods
- [ ] Error handling for all edge cases
- [ ] Proper use of TypeORM repositories
- [ ] Transaction handling where needed

**Definition of Done**:
- Service file at `backend/src/[feature-slug]/[feature-slug].service.ts`
- All methods have proper TypeScript types
- No `any` types used
- Logging added for important operations

---

### T004: Write Service Unit Tests

**Type**: Testing
**Time Estimate**: 1.5 days
**Dependencies**: T003

**Acceptance Criteria**:
- [ ] Test file created with comprehensive test suite
- [ ] All service methods tested
- [ ] Edge cases covered (not found, invalid input, etc.)
- [ ] Mocks created for repository
- [ ] Test coverage ≥ 80% for service
- [ ] All tests pass

**Definition of Done**:
- Test file at `backend/src/[feature-slug]/[feature-slug].service.spec.ts`
- `npm test` passes with no failures
- Coverage report shows ≥ 80% coverage

---

"#;

const API_PHASE: &str = r#"## Phase 3: API Layer Implementation

**Purpose**: Expose functionality via REST API endpoints

### T005: Create DTOs and Validation

**Type**: Backend
**Time Estimate**: 0.5 days
**Dependencies**: T003

**Acceptance Criteria**:
- [ ] CreateDto with class-validator decorators
- [ ] UpdateDto with optional fields
- [ ] Query/filter DTOs if needed
- [ ] Response DTOs for data serialization
- [ ] Validation rules for all fields

**Definition of Done**:
- DTO files in `backend/src/[feature-slug]/dto/`
- All DTOs properly exported
- Validation decorators from class-validator applied

---

### T006: Implement Controller Endpoints

**Type**: Backend
**Time Estimate**: 1.5 days
**Dependencies**: T005

**Acceptance Criteria**:
- [ ] GET / endpoint (list all with pagination)
- [ ] GET /:id endpoint (get by ID)
- [ ] POST / endpoint (create)
- [ ] PUT /:id endpoint (update)
- [ ] DELETE /:id endpoint (delete)
- [ ] POST /:id/process endpoint (feature-specific action)
- [ ] JWT authentication guards on all routes
- [ ] Proper HTTP status codes
- [ ] Error handling with proper responses

**Definition of Done**:
- Controller at `backend/src/[feature-slug]/[feature-slug].controller.ts`
- All endpoints properly decorated
- Authentication guards applied
- Swagger/OpenAPI annotations added

---

### T007: Write Controller Unit Tests

**Type**: Testing
**Time Estimate**: 1 day
**Dependencies**: T006

**Acceptance Criteria**:
- [ ] Test suite for all controller endpoints
- [ ] Authentication scenarios tested
- [ ] Validation error scenarios tested
- [ ] Success response scenarios tested
- [ ] Service methods properly mocked
- [ ] Test coverage ≥ 80%

**Definition of Done**:
- Test file at `backend/src/[feature-slug]/[feature-slug].controller.spec.ts`
- All tests pass
- Coverage threshold met

---

"#;

const FRONTEND_PHASE: &str = r#"## Phase 4: Frontend Implementation

**Purpose**: Build user interface components

### T008: Create API Client

**Type**: Frontend
**Time Estimate**: 0.5 days
**Dependencies**: T006

**Acceptance Criteria**:
- [ ] API client functions for all endpoints
- [ ] Proper TypeScript types for requests/responses
- [ ] Error handling
- [ ] JWT token injection
- [ ] Request/response interceptors if needed

**Definition of Done**:
- API client at `frontend/src/lib/api/[feature].ts`
- All endpoints have corresponding client functions
- Types properly defined

---

### T009: Create UI Components

**Type**: Frontend
**Time Estimate**: 2 days
**Dependencies**: T008

**Acceptance Criteria**:
- [ ] List component for displaying items
- [ ] Detail component for single item view
- [ ] Form component for create/update
- [ ] Delete confirmation dialog
- [ ] Loading states for async operations
- [ ] Error states and messages
- [ ] Use shadcn/ui components
- [ ] Tailwind CSS styling
- [ ] Responsive design

**Definition of Done**:
- Components in `frontend/src/components/[feature]/`
- All components properly typed
- Accessible (ARIA attributes)

---

### T010: Create Page and Routing

**Type**: Frontend
**Time Estimate**: 0.5 days
**Dependencies**: T009

**Acceptance Criteria**:
- [ ] Main page component created
- [ ] Route added to router configuration
- [ ] Navigation link added to sidebar/menu
- [ ] Page layout matches design system
- [ ] Protected route (requires authentication)

**Definition of Done**:
- Page at `frontend/src/pages/[FeaturePage].tsx`
- Route accessible via `/[feature-slug]`
- Page renders correctly

---

### T011: Implement State Management

**Type**: Frontend
**Time Estimate**: 1 day
**Dependencies**: T008

**Acceptance Criteria**:
- [ ] Zustand store created for feature state
- [ ] Actions for CRUD operations
- [ ] Loading and error state management
- [ ] Selectors for derived state
- [ ] Store properly typed

**Definition of Done**:
- Store at `frontend/src/store/[feature].ts`
- State updates work correctly
- No console errors

---

### T012: Write Frontend Component Tests

**Type**: Testing
**Time Estimate**: 1.5 days
**Dependencies**: T009, T010, T011

**Acceptance Criteria**:
- [ ] Tests for all components
- [ ] User interaction tests
- [ ] API integration tests with mocks
- [ ] Loading and error state tests
- [ ] Accessibility tests
- [ ] Test coverage ≥ 80%

**Definition of Done**:
- Test files in `frontend/src/components/[feature]/`
- `npm run test:run` passes
- Coverage threshold met

---

"#;

const INTEGRATION_PHASE: &str = r#"## Phase 5: Integration & Quality Assurance

**Purpose**: End-to-end testing and quality verification

### T013: Integration Testing

**Type**: Testing
**Time Estimate**: 1 day
**Dependencies**: T007, T012

**Acceptance Criteria**:
- [ ] API integration tests (real HTTP requests to test server)
- [ ] Database integration tests
- [ ] Authentication flow tests
- [ ] Error scenario tests
- [ ] All integration tests pass

**Definition of Done**:
- Integration tests created
- `npm test` passes all tests
- No flaky tests

---

### T014: Manual QA and Bug Fixes

**Type**: Testing
**Time Estimate**: 1 day
**Dependencies**: T013

**Acceptance Criteria**:
- [ ] All user stories manually tested
- [ ] All acceptance criteria verified
- [ ] Edge cases tested
- [ ] Any bugs found are documented and fixed
- [ ] Regression testing after fixes

**Definition of Done**:
- All user stories work as specified
- No critical bugs remaining
- QA checklist completed

---

### T015: Quality Gates Verification

**Type**: Testing
**Time Estimate**: 0.5 days
**Dependencies**: T014

**Acceptance Criteria**:
- [ ] Backend build succeeds: `cd backend && npm run build`
- [ ] Frontend build succeeds: `cd frontend && npm run build`
- [ ] All backend tests pass: `cd backend && npm test`
- [ ] All frontend tests pass: `cd frontend && npm run test:run`
- [ ] Test coverage ≥ 80% (statements, functions, lines)
- [ ] Test coverage ≥ 75% (branches)
- [ ] No ESLint errors
- [ ] Code formatted with Prettier
- [ ] Docker Compose starts successfully

**Definition of Done**:
- All quality gates pass
- Coverage reports generated
- Builds succeed without errors

---

"#;

const DOCUMENTATION_PHASE: &str = r#"## Phase 6: Documentation & Deployment

**Purpose**: Document feature and prepare for production

### T016: Update Documentation

**Type**: Documentation
**Time Estimate**: 0.5 days
**Dependencies**: T015

**Acceptance Criteria**:
- [ ] README.md updated with feature description
- [ ] API endpoints documented in README
- [ ] Feature added to feature list
- [ ] Inline code comments for complex logic
- [ ] Architecture documentation updated if needed
- [ ] Update spec.md status to "Implemented"

**Definition of Done**:
- README.md contains feature documentation
- All API endpoints listed
- Code comments added

---

### T017: Deployment Verification

**Type**: DevOps
**Time Estimate**: 0.5 days
**Dependencies**: T016

**Acceptance Criteria**:
- [ ] Docker images build successfully
- [ ] Docker Compose starts all services
- [ ] Database migrations run successfully
- [ ] Health checks pass
- [ ] Feature accessible in containerized environment

**Definition of Done**:
- `docker compose up --build -d` succeeds
- All services healthy
- Feature works in Docker environment

---

"#;

const EXECUTION_ORDER: &str = r#"## Dependencies & Execution Order

### Phase Dependencies
1. **Phase 1 (Setup)**: No dependencies - start immediately
2. **Phase 2 (Business Logic)**: Depends on Phase 1 completion
3. **Phase 3 (API Layer)**: Depends on Phase 2 completion
4. **Phase 4 (Frontend)**: Depends on Phase 3 completion (can start earlier with mocks)
5. **Phase 5 (Integration)**: Depends on Phase 3 + Phase 4 completion
6. **Phase 6 (Documentation)**: Depends on Phase 5 completion

### Task Dependencies
- T002 depends on T001 (need entities before creating module)
- T003 depends on T002 (need module before service)
- T004 depends on T003 (need service before testing)
- T005 depends on T003 (DTOs need service logic understanding)
- T006 depends on T005 (controller needs DTOs)
- T007 depends on T006 (test controller after implementation)
- T008 depends on T006 (API client needs endpoints)
- T009 depends on T008 (components need API client)
- T010 depends on T009 (page needs components)
- T011 depends on T008 (state management needs API client)
- T012 depends on T009, T010, T011 (test after implementation)
- T013 depends on T007, T012 (integration after unit tests)
- T014 depends on T013 (manual QA after integration)
- T015 depends on T014 (gates after bugs fixed)
- T016 depends on T015 (document after verification)
- T017 depends on T016 (deploy after documentation)

### Parallel Opportunities
- T004 and T005 can run in parallel
- T011 can start while T009 is in progress
- Documentation (T016) can be written alongside implementation

---

"#;

const STRATEGY_AND_NOTES: &str = r#"## Implementation Strategy

### Sequential Approach (Recommended)
1. Complete Phase 1 → Foundation ready
2. Complete Phase 2 → Services ready
3. Complete Phase 3 → API ready
4. Complete Phase 4 → UI ready
5. Complete Phase 5 → Tested and verified
6. Complete Phase 6 → Documented and deployed

### Time Estimate Summary
- **Phase 1**: 1.5 days
- **Phase 2**: 3.5 days
- **Phase 3**: 3 days
- **Phase 4**: 4 days
- **Phase 5**: 2.5 days
- **Phase 6**: 1 day
- **Total**: ~15.5 days

---

## Notes

- All tasks must follow constitution.md standards
- Test coverage thresholds are non-negotiable (80%+ statements, 75%+ branches)
- No `any` types allowed in TypeScript
- All endpoints must have JWT authentication
- Input validation required on all API endpoints
- Commit after completing each task or logical group
- Run quality gates before final commit

---

**Reference**: See `spec.md` and `plan.md` in this directory for scope and architecture
"#;

/// Render the full task breakdown for one feature.
pub fn render_tasks(record: &FeatureRecord, meta: &DocumentMeta) -> Result<String> {
    let sections = [
        header(record, meta)?,
        setup_phase(record)?,
        BUSINESS_LOGIC_PHASE.to_string(),
        API_PHASE.to_string(),
        FRONTEND_PHASE.to_string(),
        INTEGRATION_PHASE.to_string(),
        DOCUMENTATION_PHASE.to_string(),
        EXECUTION_ORDER.to_string(),
        STRATEGY_AND_NOTES.to_string(),
    ];
    Ok(sections.concat())
}

pub(crate) fn header(record: &FeatureRecord, meta: &DocumentMeta) -> Result<String> {
    let vars = Vars::new()
        .set("name", record.name())
        .set("slug", meta.slug.as_str())
        .set("date", meta.date.as_str())
        .set("status", record.status())
        .set("specs_dir", meta.specs_dir.as_str());
    fill("tasks header", HEADER, &vars)
}

/// Phase 1: `T001` with its per-entity lines, then `T002`.
pub(crate) fn setup_phase(record: &FeatureRecord) -> Result<String> {
    let entities = record.entities();
    let mut out = SETUP_PHASE_INTRO.to_string();
    out.push_str(&entity_criteria(entities)?);
    out.push_str(ENTITY_CRITERIA_TAIL);
    out.push_str(&entity_done_lines(entities)?);
    out.push_str(SETUP_PHASE_TAIL);
    Ok(out)
}

pub(crate) fn entity_criteria(entities: &[String]) -> Result<String> {
    entities
        .iter()
        .map(|entity| {
            let vars = Vars::new().set("entity", entity.as_str());
            fill("entity criterion", ENTITY_CRITERION, &vars)
        })
        .collect()
}

pub(crate) fn entity_done_lines(entities: &[String]) -> Result<String> {
    entities
        .iter()
        .map(|entity| {
            let vars = Vars::new().set("file_stem", entity_file_stem(entity));
            fill("entity definition of done", ENTITY_DONE, &vars)
        })
        .collect()
}
