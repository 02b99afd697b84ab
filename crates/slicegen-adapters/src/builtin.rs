//! Built-in Laravel slice blueprint.
//!
//! One slice bundles its own controller, validation, persistence model,
//! business action, bootstrap registration, view, and test. The stubs here
//! are the fixed template set the generator expands for every slice; they
//! are compile-time data, rendered through
//! [`SliceContext`](slicegen_core::domain::SliceContext) with the standard
//! `SLICE_*` variables.
//!
//! Blade's own `{{ ... }}` interpolation syntax survives rendering because
//! only exact `{{SLICE_*}}` placeholders are substituted.

use slicegen_core::domain::{FileStub, SliceBlueprint, StubContent};

// ── stub sources ──────────────────────────────────────────────────────────────

/// HTTP controller: delegates the validated payload to the handler.
const CONTROLLER: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Http;

use App\Http\Controllers\Controller;
use App\Slices\{{SLICE_PASCAL}}\Actions\{{SLICE_PASCAL}}Handler;
use App\Slices\{{SLICE_PASCAL}}\Http\{{SLICE_PASCAL}}Request;

class {{SLICE_PASCAL}}Controller extends Controller
{
    public function handle({{SLICE_PASCAL}}Request $request)
    {
        $handler = new {{SLICE_PASCAL}}Handler();
        return $handler->handle($request->validated());
    }
}
"#;

/// FormRequest with an empty rules declaration.
const REQUEST: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Http;

use Illuminate\Foundation\Http\FormRequest;

class {{SLICE_PASCAL}}Request extends FormRequest
{
    public function rules(): array
    {
        return [
            // Add your validation rules here
        ];
    }
}
"#;

/// One POST route bound to the controller, named after the slug.
const ROUTES: &str = r#"<?php

use Illuminate\Support\Facades\Route;
use App\Slices\{{SLICE_PASCAL}}\Http\{{SLICE_PASCAL}}Controller;

Route::post('/{{SLICE_KEBAB}}', [{{SLICE_PASCAL}}Controller::class, 'handle'])->name('{{SLICE_KEBAB}}');
"#;

/// Action handler: persists the payload and returns a success/id response.
const HANDLER: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Actions;

use App\Slices\{{SLICE_PASCAL}}\Models\{{SLICE_PASCAL}};

class {{SLICE_PASCAL}}Handler
{
    public function handle(array $data)
    {
        // Create a new record
        $item = {{SLICE_PASCAL}}::create($data);

        return response()->json([
            'success' => true,
            'id' => $item->id
        ]);
    }
}
"#;

/// Eloquent model with an explicit table name and empty fillable set.
const MODEL: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{SLICE_PASCAL}} extends Model
{
    use HasFactory;

    /**
     * The table associated with the model.
     *
     * @var string
     */
    protected $table = '{{SLICE_TABLE}}';

    /**
     * The attributes that are mass assignable.
     *
     * @var array<int, string>
     */
    protected $fillable = [
        // Add your fillable attributes here
    ];
}
"#;

/// ServiceProvider: boots the slice's routes and view namespace.
const PROVIDER: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Providers;

use Illuminate\Support\ServiceProvider;

class {{SLICE_PASCAL}}ServiceProvider extends ServiceProvider
{
    /**
     * Register any application services.
     */
    public function register(): void
    {
        // Register any bindings for this slice
    }

    /**
     * Bootstrap any application services.
     */
    public function boot(): void
    {
        // Load routes
        $this->loadRoutesFrom(__DIR__ . '/../Http/routes.php');

        // Load views with a specific namespace
        $this->loadViewsFrom(__DIR__ . '/../Views', '{{SLICE_PASCAL}}');
    }
}
"#;

/// Minimal Blade form with a submit control. Literal: the `{{ route(...) }}`
/// here is Blade syntax, not a slicegen placeholder.
const VIEW: &str = r#"<!-- form.blade.php -->
<form method="POST" action="{{ route('example') }}">
    @csrf
    <!-- Your form inputs here -->
    <button type="submit">Submit</button>
</form>
"#;

/// Smoke test asserting the generated POST route returns success.
const TEST: &str = r#"<?php

namespace App\Slices\{{SLICE_PASCAL}}\Tests;

use Tests\TestCase;

class {{SLICE_PASCAL}}Test extends TestCase
{
    public function test_can_handle_request()
    {
        $response = $this->post('/{{SLICE_KEBAB}}', []);
        $response->assertStatus(200);
    }
}
"#;

/// Schema migration creating the slice's table.
const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    /**
     * Run the migrations.
     */
    public function up(): void
    {
        Schema::create('{{SLICE_TABLE}}', function (Blueprint $table) {
            $table->id();
            // Add your columns here
            $table->timestamps();
        });
    }

    /**
     * Reverse the migrations.
     */
    public function down(): void
    {
        Schema::dropIfExists('{{SLICE_TABLE}}');
    }
};
"#;

// ── blueprint assembly ────────────────────────────────────────────────────────

/// The built-in Laravel vertical-slice blueprint: six directories, eight
/// file stubs, and the optional migration.
pub fn laravel_blueprint() -> SliceBlueprint {
    SliceBlueprint {
        name: "laravel-slice",
        directories: vec!["Http", "Actions", "Models", "Views", "Tests", "Providers"],
        files: vec![
            FileStub::new(
                "Http/{{SLICE_PASCAL}}Controller.php",
                StubContent::Parameterized(CONTROLLER.into()),
            ),
            FileStub::new(
                "Http/{{SLICE_PASCAL}}Request.php",
                StubContent::Parameterized(REQUEST.into()),
            ),
            FileStub::new("Http/routes.php", StubContent::Parameterized(ROUTES.into())),
            FileStub::new(
                "Actions/{{SLICE_PASCAL}}Handler.php",
                StubContent::Parameterized(HANDLER.into()),
            ),
            FileStub::new(
                "Models/{{SLICE_PASCAL}}.php",
                StubContent::Parameterized(MODEL.into()),
            ),
            FileStub::new(
                "Providers/{{SLICE_PASCAL}}ServiceProvider.php",
                StubContent::Parameterized(PROVIDER.into()),
            ),
            FileStub::new("Views/form.blade.php", StubContent::Literal(VIEW.into())),
            FileStub::new(
                "Tests/{{SLICE_PASCAL}}Test.php",
                StubContent::Parameterized(TEST.into()),
            ),
        ],
        migration: Some(StubContent::Parameterized(MIGRATION.into())),
    }
}
